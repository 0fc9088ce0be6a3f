//! Declarative particle-layer configurations.
//!
//! Each section has a decorative particle layer behind its canvas, plus one
//! page-wide background layer. The structs below serialize to the JSON
//! shape the particle library consumes; the engine only decides which
//! layer is emphasized for the active section.

use serde::Serialize;

use crate::section::SectionId;

/// DOM id of the page-wide background layer.
pub const BACKGROUND_ID: &str = "particles-bg";

/// Full configuration of one particle layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticleConfig {
    /// Particle appearance and motion.
    pub particles: Particles,
    /// Pointer interaction.
    pub interactivity: Interactivity,
    /// Scale for high-DPI screens.
    pub retina_detect: bool,
}

/// Particle appearance and motion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Particles {
    /// How many particles and how densely.
    pub number: Number,
    /// Fill color(s).
    pub color: ColorValue,
    /// Particle shape.
    pub shape: Shape,
    /// Opacity, optionally randomized and animated.
    pub opacity: Animated,
    /// Radius, optionally randomized and animated.
    pub size: Animated,
    /// Lines between nearby particles.
    pub line_linked: LineLinked,
    /// Motion.
    #[serde(rename = "move")]
    pub motion: Motion,
}

/// Particle count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Number {
    /// Particle count at the reference area.
    pub value: u32,
    /// Density scaling.
    pub density: Density,
}

/// Scale the particle count with the container area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Density {
    /// Whether density scaling is on.
    pub enable: bool,
    /// Reference area in px² (thousands).
    pub value_area: u32,
}

/// One color or a palette.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorValue {
    /// The color(s).
    pub value: Palette,
}

/// A single CSS color or a list to pick from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Palette {
    /// One color.
    One(String),
    /// Random pick per particle.
    Many(Vec<String>),
}

/// Particle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Shape {
    /// Shape family.
    #[serde(rename = "type")]
    pub kind: ShapeKind,
    /// Sides for edge/polygon shapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nb_sides: Option<u32>,
}

/// Shape families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// Disc.
    Circle,
    /// Square-ish outline with `nb_sides` edges.
    Edge,
    /// Regular polygon with `nb_sides` sides.
    Polygon,
}

/// A value with optional randomization and oscillation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Animated {
    /// Base value.
    pub value: f32,
    /// Randomize per particle between 0 and `value`.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub random: bool,
    /// Oscillation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anim: Option<Anim>,
}

impl Animated {
    fn fixed(value: f32) -> Self {
        Self {
            value,
            random: false,
            anim: None,
        }
    }

    fn random(value: f32) -> Self {
        Self {
            random: true,
            ..Self::fixed(value)
        }
    }

    fn animated(mut self, speed: f32) -> Self {
        self.anim = Some(Anim {
            enable: true,
            speed,
        });
        self
    }
}

/// Oscillation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anim {
    /// Whether oscillation is on.
    pub enable: bool,
    /// Oscillation speed.
    pub speed: f32,
}

/// Lines between nearby particles.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineLinked {
    /// Whether lines are drawn.
    pub enable: bool,
    /// Maximum linking distance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
    /// Line color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Line opacity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Line width.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl LineLinked {
    fn off() -> Self {
        Self {
            enable: false,
            distance: None,
            color: None,
            opacity: None,
            width: None,
        }
    }

    fn on(distance: f32, color: &str, opacity: f32, width: f32) -> Self {
        Self {
            enable: true,
            distance: Some(distance),
            color: Some(color.to_owned()),
            opacity: Some(opacity),
            width: Some(width),
        }
    }
}

/// Particle motion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motion {
    /// Whether particles move.
    pub enable: bool,
    /// Speed.
    pub speed: f32,
    /// Drift direction.
    pub direction: Direction,
    /// Randomize speed per particle.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub random: bool,
    /// Move in straight lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub straight: Option<bool>,
    /// What happens at the container edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_mode: Option<OutMode>,
    /// Mutual attraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attract: Option<Attract>,
}

impl Motion {
    fn drift(speed: f32) -> Self {
        Self {
            enable: true,
            speed,
            direction: Direction::None,
            random: false,
            straight: None,
            out_mode: None,
            attract: None,
        }
    }
}

/// Drift directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// No preferred direction.
    None,
    /// Downward, like falling leaves.
    Bottom,
}

/// Edge behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutMode {
    /// Leave and re-enter from the opposite edge.
    Out,
    /// Bounce off the edge.
    Bounce,
}

/// Mutual attraction parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attract {
    /// Whether attraction is on.
    pub enable: bool,
    /// Attraction along x.
    #[serde(rename = "rotateX")]
    pub rotate_x: f32,
    /// Attraction along y.
    #[serde(rename = "rotateY")]
    pub rotate_y: f32,
}

/// Pointer interaction: which hover mode is active and its parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interactivity {
    /// Event bindings.
    pub events: Events,
    /// Parameters of the bound mode.
    pub modes: InteractionMode,
}

impl Interactivity {
    /// Bind `mode` to hover; clicks do nothing.
    #[must_use]
    pub fn on_hover(mode: InteractionMode) -> Self {
        Self {
            events: Events {
                onhover: EventBinding {
                    enable: true,
                    mode: mode.name(),
                },
                onclick: Toggle { enable: false },
            },
            modes: mode,
        }
    }
}

/// Event bindings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Events {
    /// Hover binding.
    pub onhover: EventBinding,
    /// Click binding.
    pub onclick: Toggle,
}

/// An event bound to a named mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventBinding {
    /// Whether the binding is active.
    pub enable: bool,
    /// Mode name.
    pub mode: &'static str,
}

/// An on/off flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Toggle {
    /// Whether enabled.
    pub enable: bool,
}

/// Hover modes with their parameters. Serializes as `{ "<mode>": {...} }`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Push particles away from the pointer.
    Repulse {
        /// Radius.
        distance: f32,
        /// Seconds.
        duration: f32,
    },
    /// Draw lines from nearby particles to the pointer.
    Grab {
        /// Radius.
        distance: f32,
        /// Line style while grabbing.
        line_linked: GrabLine,
    },
    /// Inflate particles near the pointer.
    Bubble {
        /// Radius.
        distance: f32,
        /// Inflated size.
        size: f32,
        /// Seconds.
        duration: f32,
    },
    /// Slow particles near the pointer.
    Slow {
        /// Slowdown factor.
        factor: f32,
        /// Radius.
        radius: f32,
    },
    /// Pull particles toward the pointer.
    Attract {
        /// Radius.
        distance: f32,
        /// Seconds.
        duration: f32,
    },
}

/// Line opacity while grabbing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrabLine {
    /// Opacity.
    pub opacity: f32,
}

impl InteractionMode {
    /// Mode name as used in event bindings.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Repulse { .. } => "repulse",
            Self::Grab { .. } => "grab",
            Self::Bubble { .. } => "bubble",
            Self::Slow { .. } => "slow",
            Self::Attract { .. } => "attract",
        }
    }
}

fn palette(colors: &[&str]) -> ColorValue {
    ColorValue {
        value: Palette::Many(colors.iter().map(|c| (*c).to_owned()).collect()),
    }
}

fn number(value: u32, value_area: u32) -> Number {
    Number {
        value,
        density: Density {
            enable: true,
            value_area,
        },
    }
}

fn circle() -> Shape {
    Shape {
        kind: ShapeKind::Circle,
        nb_sides: None,
    }
}

impl ParticleConfig {
    /// Layer shown behind `section`'s canvas.
    #[must_use]
    pub fn for_section(section: SectionId) -> Self {
        let (particles, mode) = match section {
            SectionId::BigBang => (
                Particles {
                    number: number(100, 1000),
                    color: palette(&[
                        "#ff6b6b", "#ffd93d", "#6BCF7F", "#4D96FF", "#9B59B6",
                    ]),
                    shape: circle(),
                    opacity: Animated::random(0.8).animated(2.0),
                    size: Animated::random(4.0).animated(3.0),
                    line_linked: LineLinked::off(),
                    motion: Motion {
                        speed: 8.0,
                        random: true,
                        out_mode: Some(OutMode::Out),
                        attract: Some(Attract {
                            enable: true,
                            rotate_x: 600.0,
                            rotate_y: 1200.0,
                        }),
                        ..Motion::drift(8.0)
                    },
                },
                InteractionMode::Repulse {
                    distance: 150.0,
                    duration: 0.4,
                },
            ),
            SectionId::Adn => (
                Particles {
                    number: number(60, 800),
                    color: palette(&["#4ecdc4", "#45b7d1", "#96CEB4"]),
                    shape: circle(),
                    opacity: Animated::fixed(0.6).animated(1.0),
                    size: Animated::random(3.0),
                    line_linked: LineLinked::on(150.0, "#4ecdc4", 0.4, 2.0),
                    motion: Motion::drift(2.0),
                },
                InteractionMode::Grab {
                    distance: 200.0,
                    line_linked: GrabLine { opacity: 1.0 },
                },
            ),
            SectionId::Humano => (
                Particles {
                    number: number(80, 800),
                    color: palette(&["#00ffff", "#ff00ff", "#ffff00"]),
                    shape: Shape {
                        kind: ShapeKind::Edge,
                        nb_sides: Some(6),
                    },
                    opacity: Animated::fixed(0.5).animated(1.5),
                    size: Animated::random(2.0),
                    line_linked: LineLinked::on(120.0, "#00ffff", 0.3, 1.0),
                    motion: Motion {
                        straight: Some(false),
                        ..Motion::drift(3.0)
                    },
                },
                InteractionMode::Bubble {
                    distance: 100.0,
                    size: 6.0,
                    duration: 2.0,
                },
            ),
            SectionId::Vitruvio => (
                Particles {
                    number: number(50, 800),
                    color: palette(&["#ffd700", "#ffeb3b", "#fff176"]),
                    shape: Shape {
                        kind: ShapeKind::Polygon,
                        nb_sides: Some(5),
                    },
                    opacity: Animated::fixed(0.7).animated(0.5),
                    size: Animated::random(4.0),
                    line_linked: LineLinked::on(200.0, "#ffd700", 0.5, 1.0),
                    motion: Motion {
                        attract: Some(Attract {
                            enable: true,
                            rotate_x: 300.0,
                            rotate_y: 300.0,
                        }),
                        ..Motion::drift(1.0)
                    },
                },
                InteractionMode::Slow {
                    factor: 3.0,
                    radius: 200.0,
                },
            ),
            SectionId::Newton => (
                Particles {
                    number: number(100, 800),
                    color: palette(&["#43e97b", "#38f9d7", "#4facfe"]),
                    shape: circle(),
                    opacity: Animated::random(0.6),
                    size: Animated::random(3.0).animated(2.0),
                    line_linked: LineLinked::on(100.0, "#43e97b", 0.2, 1.0),
                    motion: Motion {
                        direction: Direction::Bottom,
                        straight: Some(false),
                        out_mode: Some(OutMode::Bounce),
                        ..Motion::drift(4.0)
                    },
                },
                InteractionMode::Attract {
                    distance: 200.0,
                    duration: 0.4,
                },
            ),
        };
        Self {
            particles,
            interactivity: Interactivity::on_hover(mode),
            retina_detect: true,
        }
    }

    /// The page-wide background layer: sparse white dust.
    #[must_use]
    pub fn background() -> Self {
        Self {
            particles: Particles {
                number: number(65, 700),
                color: ColorValue {
                    value: Palette::One("#fff".to_owned()),
                },
                shape: circle(),
                opacity: Animated::random(0.5),
                size: Animated::random(3.5),
                line_linked: LineLinked::off(),
                motion: Motion {
                    random: true,
                    out_mode: Some(OutMode::Out),
                    ..Motion::drift(1.1)
                },
            },
            interactivity: Interactivity::on_hover(InteractionMode::Repulse {
                distance: 90.0,
                duration: 0.6,
            }),
            retina_detect: true,
        }
    }

    /// JSON text in the particle library's format.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
