/// Time-based animator advanced once per frame, before the section
/// animations run (skeletal or keyframe clips shipped inside model files).
///
/// The engine ships no implementation: model formats it reads carry no
/// clips. Hosts that play clips register their own through
/// [`StoryEngine::add_mixer`](crate::engine::StoryEngine::add_mixer).
pub trait ClipMixer {
    /// Advance by `dt` seconds.
    fn update(&mut self, dt: f32);
}
