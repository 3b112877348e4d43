//! Feature and action tables
//!
//! Codes follow the ML1050STi / ML750i RS-232 reference. Query codes and
//! command codes for the same setting are often different numbers (HDMI is
//! set with `12 1` but reported as `7`), so each direction has its own table.
//! Labels are shared so a captured value can be fed straight back.

use super::{ActionSpec, CommandSpec, Decoder, Domain, FeatureSpec, QuerySpec};

// =============================================================================
// Code Tables
// =============================================================================

pub const INPUT_SOURCE_REPORTED: &[(u16, &str)] =
    &[(7, "HDMI 1"), (20, "Android Home (USB-A/SD Card)")];

pub const INPUT_SOURCE_CHOICES: &[(&str, &str)] = &[
    ("HDMI 1", "1"),
    ("USB-A", "17"),
    ("SD Card", "31"),
    ("Android Home", "24"),
    ("Android Home (USB-A/SD Card)", "24"),
];

pub const PROJECTION_REPORTED: &[(u16, &str)] = &[
    (0, "Front-Desktop"),
    (1, "Rear-Desktop"),
    (2, "Front-Ceiling"),
    (3, "Rear-Ceiling"),
];

pub const PROJECTION_CHOICES: &[(&str, &str)] = &[
    ("Front-Desktop", "1"),
    ("Rear-Desktop", "2"),
    ("Front-Ceiling", "3"),
    ("Rear-Ceiling", "4"),
];

pub const DISPLAY_MODE_REPORTED: &[(u16, &str)] = &[
    (1, "Presentation (PC)"),
    (2, "Bright"),
    (3, "Cinema"),
    (4, "sRGB"),
    (9, "3D"),
    (12, "Game"),
    (14, "Photo (Vivid)"),
    (21, "HDR"),
    (25, "HLG"),
    (41, "AI-PQ"),
    (42, "WCG"),
    (43, "Eco"),
];

pub const DISPLAY_MODE_CHOICES: &[(&str, &str)] = &[
    ("Presentation (PC)", "1"),
    ("Bright", "2"),
    ("Cinema", "3"),
    ("sRGB", "4"),
    ("3D", "9"),
    ("Game", "12"),
    ("Photo (Vivid)", "16"),
    ("HDR", "21"),
    ("HLG", "25"),
    ("AI-PQ", "41"),
    ("WCG", "42"),
    ("Eco", "44"),
];

pub const COLOR_TEMPERATURE_REPORTED: &[(u16, &str)] =
    &[(2, "Standard (D75)"), (3, "Warm (D65)"), (5, "Cold (D83)")];

pub const COLOR_TEMPERATURE_CHOICES: &[(&str, &str)] = &[
    ("Standard (D75)", "1"),
    ("Cold (D83)", "3"),
    ("Warm (D65)", "4"),
];

pub const ASPECT_RATIO_REPORTED: &[(u16, &str)] =
    &[(1, "4:3"), (2, "16:9"), (3, "16:10"), (7, "Auto")];

pub const ASPECT_RATIO_CHOICES: &[(&str, &str)] =
    &[("4:3", "1"), ("16:9", "2"), ("16:10", "3"), ("Auto", "7")];

pub const ZOOM_LEVELS: &[(u16, &str)] = &[
    (0, "50%"),
    (1, "75%"),
    (2, "100%"),
    (3, "125%"),
    (4, "150%"),
    (5, "175%"),
    (6, "200%"),
];

pub const LANGUAGE_CHOICES: &[(&str, &str)] = &[
    ("English", "1"),
    ("German", "2"),
    ("French", "3"),
    ("Italian", "4"),
    ("Spanish", "5"),
    ("Portuguese", "6"),
    ("Polish", "7"),
    ("Dutch", "8"),
    ("Swedish", "9"),
    ("Russian", "17"),
    ("Arabic", "20"),
    ("Turkish", "22"),
];

/// Picture-mode codes inside the `150 1` system-information reply
pub const SYSTEM_INFO_PICTURE_MODES: &[(u16, &str)] = &[
    (1, "Presentation (PC)"),
    (2, "Bright"),
    (3, "Cinema"),
    (4, "sRGB"),
    (14, "Photo (Vivid)"),
    (28, "Eco"),
    (29, "iDevice"),
];

// =============================================================================
// Helpers
// =============================================================================

const fn get(opcode: &'static str, arg: &'static str, decoder: Decoder) -> Option<QuerySpec> {
    Some(QuerySpec {
        opcode,
        arg,
        decoder,
    })
}

const fn set(opcode: &'static str, domain: Domain) -> Option<CommandSpec> {
    Some(CommandSpec { opcode, domain })
}

const ON_OFF: Domain = Domain::Flag { on: "1", off: "0" };

// =============================================================================
// Settings
// =============================================================================

pub static POWER: FeatureSpec = FeatureSpec {
    name: "power",
    description: "Lamp/system power",
    query: get("124", "1", Decoder::Flag),
    command: set("00", ON_OFF),
};

pub static AV_MUTE: FeatureSpec = FeatureSpec {
    name: "av_mute",
    description: "Blank video and audio",
    query: get("355", "1", Decoder::Flag),
    command: set("02", ON_OFF),
};

pub static AUDIO_MUTE: FeatureSpec = FeatureSpec {
    name: "audio_mute",
    description: "Mute audio only",
    query: get("356", "1", Decoder::Flag),
    command: set("03", ON_OFF),
};

pub static INPUT_SOURCE: FeatureSpec = FeatureSpec {
    name: "input_source",
    description: "Active input",
    query: get("121", "1", Decoder::Enumerated(INPUT_SOURCE_REPORTED)),
    command: set("12", Domain::Choices(INPUT_SOURCE_CHOICES)),
};

pub static DISPLAY_MODE: FeatureSpec = FeatureSpec {
    name: "display_mode",
    description: "Picture preset",
    query: get("123", "1", Decoder::Enumerated(DISPLAY_MODE_REPORTED)),
    command: set("20", Domain::Choices(DISPLAY_MODE_CHOICES)),
};

pub static PROJECTION_MODE: FeatureSpec = FeatureSpec {
    name: "projection_mode",
    description: "Mounting orientation",
    query: get("129", "1", Decoder::Enumerated(PROJECTION_REPORTED)),
    command: set("71", Domain::Choices(PROJECTION_CHOICES)),
};

pub static ASPECT_RATIO: FeatureSpec = FeatureSpec {
    name: "aspect_ratio",
    description: "Output aspect ratio",
    query: get("127", "1", Decoder::Enumerated(ASPECT_RATIO_REPORTED)),
    command: set("60", Domain::Choices(ASPECT_RATIO_CHOICES)),
};

pub static DIGITAL_ZOOM: FeatureSpec = FeatureSpec {
    name: "digital_zoom",
    description: "Digital zoom, level 0-6 or 50%-200%",
    query: get("543", "9", Decoder::Enumerated(ZOOM_LEVELS)),
    command: set("62", Domain::Zoom(ZOOM_LEVELS)),
};

pub static BRIGHTNESS: FeatureSpec = FeatureSpec {
    name: "brightness",
    description: "Brightness 0-10",
    query: get("125", "1", Decoder::Integer),
    command: set("21", Domain::Range { min: 0, max: 10 }),
};

pub static CONTRAST: FeatureSpec = FeatureSpec {
    name: "contrast",
    description: "Contrast 0-10",
    query: get("126", "1", Decoder::Integer),
    command: set("22", Domain::Range { min: 0, max: 10 }),
};

pub static COLOR_TEMPERATURE: FeatureSpec = FeatureSpec {
    name: "color_temperature",
    description: "White point preset",
    query: get("128", "1", Decoder::Enumerated(COLOR_TEMPERATURE_REPORTED)),
    command: set("36", Domain::Choices(COLOR_TEMPERATURE_CHOICES)),
};

pub static VOLUME: FeatureSpec = FeatureSpec {
    name: "volume",
    description: "Speaker volume 0-10 (set by stepping)",
    query: get("120", "1", Decoder::Integer),
    command: set(
        "140",
        Domain::Stepped {
            up: "18",
            down: "17",
            min: 0,
            max: 10,
        },
    ),
};

pub static V_KEYSTONE: FeatureSpec = FeatureSpec {
    name: "v_keystone",
    description: "Vertical keystone -40..40",
    query: get("543", "3", Decoder::Integer),
    command: set("66", Domain::Range { min: -40, max: 40 }),
};

pub static LANGUAGE: FeatureSpec = FeatureSpec {
    name: "language",
    description: "OSD language",
    query: None,
    command: set("70", Domain::Choices(LANGUAGE_CHOICES)),
};

pub static DIGITAL_SIGNAGE: FeatureSpec = FeatureSpec {
    name: "digital_signage",
    description: "Digital signage mode",
    query: get("568", "1", Decoder::Flag),
    command: set("569", Domain::Flag { on: "2", off: "1" }),
};

// =============================================================================
// Read-only information
// =============================================================================

pub static NETWORK_STATUS: FeatureSpec = FeatureSpec {
    name: "network_status",
    description: "WiFi connected",
    query: get("451", "1", Decoder::Flag),
    command: None,
};

pub static SIGNAL_STATUS: FeatureSpec = FeatureSpec {
    name: "signal_status",
    description: "Signal present on current input",
    query: get("150", "23", Decoder::Flag),
    command: None,
};

pub static LAMP_HOURS: FeatureSpec = FeatureSpec {
    name: "lamp_hours",
    description: "Light source hours",
    query: get("108", "1", Decoder::Integer),
    command: None,
};

pub static SYSTEM_HOURS: FeatureSpec = FeatureSpec {
    name: "system_hours",
    description: "Total system hours",
    query: get("150", "21", Decoder::Integer),
    command: None,
};

pub static TEMPERATURE: FeatureSpec = FeatureSpec {
    name: "temperature",
    description: "System temperature",
    query: get("352", "1", Decoder::Integer),
    command: None,
};

pub static SYSTEM_FAN_1: FeatureSpec = FeatureSpec {
    name: "system_fan_1",
    description: "System fan 1 RPM",
    query: get("351", "0", Decoder::Integer),
    command: None,
};

pub static SYSTEM_FAN_2: FeatureSpec = FeatureSpec {
    name: "system_fan_2",
    description: "System fan 2 RPM",
    query: get("351", "1", Decoder::Integer),
    command: None,
};

pub static OPTICAL_FAN: FeatureSpec = FeatureSpec {
    name: "optical_fan",
    description: "Optical engine fan RPM",
    query: get("351", "2", Decoder::Integer),
    command: None,
};

pub static MAC_ADDRESS: FeatureSpec = FeatureSpec {
    name: "mac_address",
    description: "Network MAC address",
    query: get("555", "2", Decoder::Text),
    command: None,
};

pub static PROJECTOR_ID: FeatureSpec = FeatureSpec {
    name: "projector_id",
    description: "Configured RS-232 device id",
    query: get("558", "1", Decoder::Text),
    command: None,
};

pub static RESOLUTION: FeatureSpec = FeatureSpec {
    name: "resolution",
    description: "Source resolution",
    query: get("150", "4", Decoder::Text),
    command: None,
};

pub static REFRESH_RATE: FeatureSpec = FeatureSpec {
    name: "refresh_rate",
    description: "Source refresh rate",
    query: get("150", "19", Decoder::Text),
    command: None,
};

pub static DDP_VERSION: FeatureSpec = FeatureSpec {
    name: "ddp_version",
    description: "DDP software version",
    query: get("357", "3", Decoder::Text),
    command: None,
};

pub static ANDROID_VERSION: FeatureSpec = FeatureSpec {
    name: "android_version",
    description: "Android software version",
    query: get("357", "4", Decoder::Text),
    command: None,
};

/// Every feature, settings first
pub static FEATURES: &[&FeatureSpec] = &[
    &POWER,
    &AV_MUTE,
    &AUDIO_MUTE,
    &INPUT_SOURCE,
    &DISPLAY_MODE,
    &PROJECTION_MODE,
    &ASPECT_RATIO,
    &DIGITAL_ZOOM,
    &BRIGHTNESS,
    &CONTRAST,
    &COLOR_TEMPERATURE,
    &VOLUME,
    &V_KEYSTONE,
    &LANGUAGE,
    &DIGITAL_SIGNAGE,
    &NETWORK_STATUS,
    &SIGNAL_STATUS,
    &LAMP_HOURS,
    &SYSTEM_HOURS,
    &TEMPERATURE,
    &SYSTEM_FAN_1,
    &SYSTEM_FAN_2,
    &OPTICAL_FAN,
    &MAC_ADDRESS,
    &PROJECTOR_ID,
    &RESOLUTION,
    &REFRESH_RATE,
    &DDP_VERSION,
    &ANDROID_VERSION,
];

// =============================================================================
// Actions
// =============================================================================

const fn action(
    name: &'static str,
    description: &'static str,
    opcode: &'static str,
    arg: &'static str,
) -> ActionSpec {
    ActionSpec {
        name,
        description,
        opcode,
        arg,
    }
}

pub static FREEZE_ON: ActionSpec = action("freeze_on", "Freeze the image", "04", "1");
pub static FREEZE_OFF: ActionSpec = action("freeze_off", "Unfreeze the image", "04", "0");
pub static AUTO_KEYSTONE_ON: ActionSpec =
    action("auto_keystone_on", "Enable auto keystone", "69", "1");
pub static AUTO_KEYSTONE_OFF: ActionSpec =
    action("auto_keystone_off", "Disable auto keystone", "69", "0");
pub static VOLUME_UP: ActionSpec = action("volume_up", "Volume up one step", "140", "18");
pub static VOLUME_DOWN: ActionSpec = action("volume_down", "Volume down one step", "140", "17");
pub static MENU: ActionSpec = action("menu", "Open the OSD menu", "140", "20");
pub static UP: ActionSpec = action("up", "OSD up", "140", "10");
pub static DOWN: ActionSpec = action("down", "OSD down", "140", "14");
pub static LEFT: ActionSpec = action("left", "OSD left", "140", "11");
pub static RIGHT: ActionSpec = action("right", "OSD right", "140", "13");
pub static ENTER: ActionSpec = action("enter", "OSD enter", "140", "12");
pub static RESET_OSD: ActionSpec = action("reset_osd", "Reset OSD settings", "546", "1");
pub static FACTORY_RESET: ActionSpec =
    action("factory_reset", "Reset every setting to factory defaults", "112", "1");

pub static ACTIONS: &[&ActionSpec] = &[
    &FREEZE_ON,
    &FREEZE_OFF,
    &AUTO_KEYSTONE_ON,
    &AUTO_KEYSTONE_OFF,
    &VOLUME_UP,
    &VOLUME_DOWN,
    &MENU,
    &UP,
    &DOWN,
    &LEFT,
    &RIGHT,
    &ENTER,
    &RESET_OSD,
    &FACTORY_RESET,
];
