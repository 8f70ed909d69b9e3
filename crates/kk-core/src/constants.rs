/// Genesis instant in Unix seconds: 2024-05-10T06:45:41Z
pub const GENESIS_UNIX_SECS: i64 = 1_715_323_541;

/// Sub-second part of the genesis instant (.888 s)
pub const GENESIS_SUBSEC_NANOS: u32 = 888_000_000;

/// Sunrise anchor for the solar-aligned day: 2024-05-11T04:30:00Z
pub const SUNRISE_UNIX_SECS: i64 = 1_715_401_800;

pub const NANOS_PER_SEC: i64 = 1_000_000_000;

pub const SECONDS_PER_CHRONOS_DAY: i64 = 86_400;

/// Pulse duration is 3 + √5 seconds: `PULSE_RATIONAL + PULSE_RADICAL·√5`.
pub const PULSE_RATIONAL: i64 = 3;
pub const PULSE_RADICAL: i64 = 1;

// --- Grid lattice (exact integers) ---

pub const GRID_PULSES_PER_STEP: u32 = 11;
pub const GRID_STEPS_PER_BEAT: u32 = 44;
pub const GRID_BEATS_PER_DAY: u32 = 36;
pub const GRID_PULSES_PER_BEAT: u32 = GRID_PULSES_PER_STEP * GRID_STEPS_PER_BEAT;
pub const GRID_PULSES_PER_DAY: u32 = GRID_PULSES_PER_BEAT * GRID_BEATS_PER_DAY;

// --- φ-closure calendar ---

/// Calendar day length 17,491.270421 pulses, as numerator / denominator.
pub const CALENDAR_DAY_PULSES_NUMER: i64 = 17_491_270_421;
pub const CALENDAR_DAY_PULSES_DENOM: i64 = 1_000_000;

pub const DAYS_PER_WEEK: i64 = 6;
pub const WEEKS_PER_MONTH: i64 = 7;
pub const DAYS_PER_MONTH: i64 = 42;
pub const MONTHS_PER_YEAR: i64 = 8;
pub const DAYS_PER_YEAR: i64 = DAYS_PER_MONTH * MONTHS_PER_YEAR;
pub const ARCS_PER_DAY: i64 = 6;

/// Short harmonic cycles reported alongside the calendar day (pulses).
pub const ARC_BEAT_PULSES: i64 = 6;
pub const MICRO_CYCLE_PULSES: i64 = 60;
pub const CHAKRA_LOOP_PULSES: i64 = 360;

// --- Precision ---

/// Decimal places kept for percentages.
pub const PERCENT_SCALE: u32 = 6;

/// Percentages never display as a full 100%.
pub const PERCENT_CEILING_MICROS: i64 = 99_999_999;

/// Decimal places kept for day counts in the epoch table.
pub const DAYS_SCALE: u32 = 6;

/// Decimal places kept for durations, frequencies and wavelengths.
pub const PHYSICS_SCALE: u32 = 12;

pub const SPEED_OF_SOUND_M_S: i64 = 343;
pub const SPEED_OF_LIGHT_M_S: i64 = 299_792_458;

// --- Name tables ---

pub const DAY_NAMES: [&str; 6] = ["Solhara", "Aquaris", "Flamora", "Verdari", "Sonari", "Kaelith"];

pub const WEEK_NAMES: [&str; 7] = [
    "Awakening Flame",
    "Flowing Heart",
    "Radiant Will",
    "Harmonic Voice",
    "Inner Mirror",
    "Dreamfire Memory",
    "Crowned Light",
];

pub const ARC_NAMES: [&str; 6] = ["Ignite", "Integrate", "Harmonize", "Reflect", "Purify", "Dream"];

pub const MONTH_NAMES: [&str; 8] = [
    "Aethon", "Virelai", "Solari", "Amarin", "Caelus", "Umbriel", "Noctura", "Liora",
];

pub const KAI_TURAH_PHRASES: [&str; 10] = [
    "Tor Lah Mek Ka",
    "Shoh Vel Lah Tzur",
    "Rah Veh Yah Dah",
    "Nel Shaum Eh Lior",
    "Ah Ki Tzah Reh",
    "Or Vem Shai Tuun",
    "Ehlum Torai Zhak",
    "Zho Veh Lah Kurei",
    "Tuul Ka Yesh Aum",
    "Sha Vehl Dorrah",
];

/// φ-exponents of the spiral epochs, with their display names.
pub const SPIRAL_EPOCHS: [(u32, &str); 8] = [
    (0, "Eternal Year"),
    (1, "Phi Epoch"),
    (2, "Phi Resonance Epoch"),
    (3, "Tri-Spiral Gate"),
    (5, "Great Harmonic Ring"),
    (8, "Kai-Cycle of Return"),
    (13, "Solar Spiral Era"),
    (21, "One Breath of Erah Voh"),
];

/// Fractions of one pulse: (key, divisor, resonant name).
pub const SUBDIVISIONS: [(&str, u32, &str); 11] = [
    ("halfPulse", 2, "Pulse Divider"),
    ("subpulse", 11, "Beat Tuning"),
    ("ternaryStep", 33, "Tri-Light Step"),
    ("microStep", 55, "Resonant Breath"),
    ("nanoPulse", 89, "First Spark"),
    ("nanoStep", 144, "Nano Ark"),
    ("phiQuantum", 233, "Phi Quantum"),
    ("ekaru", 377, "Ekaru Initiation"),
    ("tzaphirimUnit", 610, "Tzaphirim Krystal"),
    ("kaiSingularity", 987, "Kai Singularity"),
    ("deepThread", 1597, "Deep Thread"),
];
