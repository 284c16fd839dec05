//! Segment lists for every named show

use rand::{Rng, RngCore};

use super::{Segment, ShowSettings};
use crate::{
    color::{BLACK, BLUE, HexColor, RED, Rgb, WHITE, random_color, rgb_from_u32},
    command::Command,
    pattern::{
        ColorCollision, GoldSparkle, HueSweep, LarsonScanner, PatternId, PatternSlot,
        TheaterChase,
    },
    routine::{Animation, Delay, Routine, Script, Step},
};

const DEMO_PAUSE: Delay = Delay::millis(500);

const FADE_COLORS: [u32; 6] = [0xFF_0080, 0x80_00FF, 0x00_80FF, 0x00_FF80, 0xFF_FF00, 0xFF_8000];
const FUN_SWEEP_STEP: u32 = 8;
const ROYAL_BLUE: HexColor = HexColor(rgb_from_u32(0x41_69E1));

const LARSON_CYCLES: u32 = 3;

const FLASH_PALETTE: [u32; 15] = [
    0xFF_0000, 0x00_FF00, 0x00_00FF, 0xFF_FF00, 0xFF_00FF, 0x00_FFFF, 0xFF_8000, 0x80_00FF,
    0xFF_FFFF, 0x80_8080, 0xFF_4500, 0x1E_90FF, 0xFF_D700, 0xDC_143C, 0x4B_0082,
];

/// Patterns shown as single still frames in the chaos show
const STILL_PATTERNS: [PatternId; 10] = [
    PatternId::RandomPixels,
    PatternId::RainbowJitter,
    PatternId::Alternating,
    PatternId::Wave,
    PatternId::Blocks,
    PatternId::Sparkle,
    PatternId::Stripes,
    PatternId::Gradient,
    PatternId::StaticNoise,
    PatternId::Checker,
];

/// Short animations of the chaos show with their frame delays
const CHAOS_ANIMATIONS: [(PatternId, Delay); 5] = [
    (PatternId::HueSweep, Delay::millis(30)),
    (PatternId::Chaser, Delay::millis(25)),
    (PatternId::PulseSections, Delay::millis(40)),
    (PatternId::Bounce, Delay::millis(35)),
    (PatternId::ExplodingSparkles, Delay::random_millis(20, 50)),
];

fn boxed(routine: impl Routine + 'static) -> Segment {
    Box::new(routine)
}

fn animation(slot: PatternSlot, settings: &ShowSettings, frames: u32, delay: Delay) -> Segment {
    boxed(
        Animation::new(slot, settings.strip)
            .with_frames(frames)
            .with_delay(delay),
    )
}

fn sampled(
    id: PatternId,
    rng: &mut dyn RngCore,
    settings: &ShowSettings,
    frames: u32,
    delay: Delay,
) -> Segment {
    animation(id.sample(rng, settings.strip), settings, frames, delay)
}

const fn solid(color: Rgb) -> Command {
    Command::SolidColor(color)
}

const fn strobe(color: u32, speed: u32, duration: u32) -> Command {
    Command::Strobe {
        color: HexColor(rgb_from_u32(color)),
        speed,
        duration,
    }
}

pub(super) fn demo(_rng: &mut dyn RngCore, _settings: &ShowSettings) -> Vec<Segment> {
    let commands = [
        Command::solid(62, 255, 41),
        strobe(0xFF_0000, 80, 3000),
        Command::Rainbow {
            num_rainbows: 2,
            value: 10_000,
            speed: 180,
        },
        strobe(0x00_FF00, 150, 800),
        Command::Breathe {
            color: HexColor(RED),
            speed: 100,
        },
        strobe(0x00_00FF, 250, 2500),
    ];
    vec![boxed(Script::new(
        "sequence",
        commands.into_iter().map(|command| Step::send(command, DEMO_PAUSE)),
    ))]
}

pub(super) fn toggle(_rng: &mut dyn RngCore, settings: &ShowSettings) -> Vec<Segment> {
    let delay = Delay::Fixed(settings.toggle_speed);
    let steps = (0..settings.toggle_pairs())
        .flat_map(|_| [Step::send(solid(RED), delay), Step::send(solid(BLUE), delay)]);
    vec![boxed(Script::new("red/blue toggle", steps))]
}

pub(super) fn fun(rng: &mut dyn RngCore, settings: &ShowSettings) -> Vec<Segment> {
    let fades = FADE_COLORS
        .iter()
        .map(|&color| Step::send(solid(rgb_from_u32(color)), Delay::millis(1500)));
    vec![
        boxed(Script::new("color fade", fades)),
        animation(
            PatternSlot::HueSweep(HueSweep::new(FUN_SWEEP_STEP)),
            settings,
            60,
            Delay::millis(50),
        ),
        boxed(Script::new(
            "sparkle base",
            [Step::send(solid(GoldSparkle::BASE), Delay::millis(500))],
        )),
        sampled(PatternId::GoldSparkle, rng, settings, 40, Delay::millis(100)),
        boxed(Script::new(
            "gentle breathing",
            [Step::send(
                Command::Breathe {
                    color: ROYAL_BLUE,
                    speed: 150,
                },
                Delay::millis(5000),
            )],
        )),
        sampled(PatternId::Fire, rng, settings, 80, Delay::millis(60)),
        sampled(PatternId::Ocean, rng, settings, 100, Delay::millis(40)),
        sampled(PatternId::Comet, rng, settings, 100, Delay::millis(30)),
        sampled(PatternId::SectionPulse, rng, settings, 60, Delay::millis(50)),
        boxed(Script::new(
            "smooth rainbow",
            [
                Step::send(
                    Command::Rainbow {
                        num_rainbows: 3,
                        value: 8000,
                        speed: 1000,
                    },
                    Delay::millis(8000),
                ),
                Step::pause(Delay::millis(800)),
            ],
        )),
    ]
}

pub(super) fn explicit(rng: &mut dyn RngCore, settings: &ShowSettings) -> Vec<Segment> {
    let len = settings.strip.get();
    let collision = ColorCollision::default();
    let collision_frames = collision.frames_to_meet(len) + 1;
    let scanner = LarsonScanner::default();
    let scanner_frames = scanner.period(len) * LARSON_CYCLES;
    let tick = Delay::millis(1);
    vec![
        animation(
            PatternSlot::TheaterChase(TheaterChase::default()),
            settings,
            TheaterChase::period(),
            Delay::millis(2),
        ),
        sampled(PatternId::MatrixRain, rng, settings, 150, tick),
        animation(
            PatternSlot::ColorCollision(collision),
            settings,
            collision_frames,
            tick,
        ),
        sampled(PatternId::SmoothNoise, rng, settings, 100, tick),
        animation(
            PatternSlot::LarsonScanner(scanner),
            settings,
            scanner_frames,
            tick,
        ),
        sampled(PatternId::Twinkle, rng, settings, 100, tick),
        sampled(PatternId::RotatingSegments, rng, settings, 100, Delay::millis(80)),
        sampled(PatternId::BreathingRainbow, rng, settings, 60, Delay::millis(80)),
        sampled(PatternId::Plasma, rng, settings, 120, Delay::millis(80)),
        boxed(Script::new("pause", [Step::pause(Delay::millis(1000))])),
    ]
}

pub(super) fn chaos(rng: &mut dyn RngCore, settings: &ShowSettings) -> Vec<Segment> {
    let mut segments = Vec::new();

    let flashes: Vec<Step> = (0..rng.gen_range(15..35))
        .map(|_| {
            let color = FLASH_PALETTE[rng.gen_range(0..FLASH_PALETTE.len())];
            Step::send(solid(rgb_from_u32(color)), Delay::random_millis(10, 60))
        })
        .collect();
    segments.push(boxed(Script::new("violent flashing", flashes)));

    let strobes: Vec<Step> = (0..rng.gen_range(3..7))
        .map(|_| {
            let command = Command::Strobe {
                color: HexColor::sample(rng),
                speed: rng.gen_range(30..110),
                duration: rng.gen_range(1000..1800),
            };
            Step::send(command, Delay::ZERO)
        })
        .collect();
    segments.push(boxed(Script::new("strobe cascade", strobes)));

    let breaths: Vec<Step> = (0..rng.gen_range(2..5))
        .map(|_| {
            let command = Command::Breathe {
                color: HexColor::sample(rng),
                speed: rng.gen_range(20..120),
            };
            Step::send(command, Delay::random_millis(500, 1300))
        })
        .collect();
    segments.push(boxed(Script::new("breathing chaos", breaths)));

    let rainbow = Command::Rainbow {
        num_rainbows: rng.gen_range(2..10),
        value: rng.gen_range(800..8800),
        speed: rng.gen_range(500..2000),
    };
    segments.push(boxed(Script::new(
        "rainbow madness",
        [Step::send(rainbow, Delay::ZERO)],
    )));

    let colors: Vec<Step> = (0..rng.gen_range(40..100))
        .map(|_| Step::send(solid(random_color(rng)), Delay::random_millis(5, 85)))
        .collect();
    segments.push(boxed(Script::new("random colors", colors)));

    for _ in 0..rng.gen_range(25..40) {
        let id = STILL_PATTERNS[rng.gen_range(0..STILL_PATTERNS.len())];
        segments.push(sampled(id, rng, settings, 1, Delay::random_millis(100, 500)));
    }

    for _ in 0..rng.gen_range(3..6) {
        let (id, delay) = CHAOS_ANIMATIONS[rng.gen_range(0..CHAOS_ANIMATIONS.len())];
        let frames = rng.gen_range(30..70);
        segments.push(sampled(id, rng, settings, frames, delay));
    }

    let extremes: Vec<Step> = (0..rng.gen_range(20..50))
        .map(|_| {
            let color = if rng.gen_bool(0.5) { WHITE } else { BLACK };
            Step::send(solid(color), Delay::random_millis(10, 70))
        })
        .collect();
    segments.push(boxed(Script::new("extreme alternation", extremes)));

    segments.push(boxed(Script::new(
        "pause",
        [Step::pause(Delay::random_millis(500, 1500))],
    )));
    segments
}
