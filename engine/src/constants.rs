// Constants used by the puzzle box engine and shared with the game node.

/// Orientation and drag gesture
pub mod orientation_constants {
    // Radians of rotation per pixel of pointer travel (both axes).
    pub const DRAG_SENSITIVITY_RAD_PER_PX: f32 = 0.01;

    // Home orientation in degrees, restored on reset.
    pub const HOME_PITCH_DEG: f32 = -15.0;
    pub const HOME_YAW_DEG: f32 = -25.0;
}

/// Cube geometry used for picking
pub mod cube_constants {
    // Half of the cube's edge length, in world units.
    pub const CUBE_HALF_EXTENT: f32 = 1.5;

    // Number of triangles making up the cube surface (2 per face).
    pub const CUBE_TRIANGLE_COUNT: usize = 12;

    // Rays closer than this to parallel with a triangle are ignored.
    pub const RAY_EPSILON: f32 = 1e-6;

    // Face panels sit slightly inside the body edges.
    pub const FACE_PANEL_SCALE: f32 = 0.92;
    pub const FACE_PANEL_OFFSET: f32 = 0.005;

    // Glyph drawn on each panel, as a fraction of the half extent.
    pub const GLYPH_RADIUS_FRACTION: f32 = 0.35;

    pub const BODY_COLOR: [f32; 4] = [0.22, 0.14, 0.09, 1.0];
    pub const PANEL_COLOR: [f32; 4] = [0.55, 0.42, 0.28, 1.0];
    // PANEL_COLOR fully desaturated and dimmed to 60%.
    pub const SOLVED_PANEL_COLOR: [f32; 4] = [0.27, 0.27, 0.27, 1.0];
    pub const GLYPH_COLOR: [f32; 4] = [0.1, 0.08, 0.06, 1.0];

    // Front panel per front state: awake, dormant-closed, dormant-open.
    pub const FRONT_AWAKE_COLOR: [f32; 4] = [0.55, 0.1, 0.15, 1.0];
    pub const FRONT_DORMANT_CLOSED_COLOR: [f32; 4] = [0.3, 0.32, 0.2, 1.0];
    pub const FRONT_DORMANT_OPEN_COLOR: [f32; 4] = [0.95, 0.85, 0.95, 1.0];
}

/// 3D camera
pub mod camera_3d_constants {
    pub const CAMERA_3D_INITIAL_X: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Y: f32 = 0.0;
    pub const CAMERA_3D_INITIAL_Z: f32 = 8.0;

    // Vertical field of view (Bevy's default perspective projection).
    pub const CAMERA_3D_FOV_Y_RAD: f32 = std::f32::consts::FRAC_PI_4;

    pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1280.0;
    pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;
}

/// Time dial and environmental predicates
pub mod environment_constants {
    pub const HOURS_PER_DAY: f32 = 24.0;

    pub const DAYTIME_START_HOUR: f32 = 6.0;
    pub const DAYTIME_END_HOUR: f32 = 18.0;

    pub const MIDDAY_START_HOUR: f32 = 11.0;
    pub const MIDDAY_END_HOUR: f32 = 13.0;

    // Front normal must point this close to world down (cosine).
    pub const COSINE_FACING_DOWN_THRESHOLD: f32 = 0.95;

    // brightness = base + amplitude * sin(hour / 24 * PI)
    pub const BRIGHTNESS_BASE: f32 = 0.5;
    pub const BRIGHTNESS_AMPLITUDE: f32 = 0.5;

    pub const INITIAL_HOUR: f32 = 20.0;

    // Hours added or removed per key press on the dial.
    pub const TIME_DIAL_STEP_HOURS: f32 = 0.5;
}

/// Lighting
pub mod lighting_constants {
    // Ambient brightness = environment brightness * scale.
    pub const AMBIENT_BRIGHTNESS_SCALE: f32 = 600.0;
    pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 4_000.0;
    pub const BACKGROUND_NIGHT_COLOR: [f32; 3] = [0.02, 0.02, 0.06];
    pub const BACKGROUND_DAY_COLOR: [f32; 3] = [0.45, 0.6, 0.8];
}

/// Valve puzzle (back face)
pub mod valve_constants {
    pub const SYSTOLIC_BASE: i32 = 100;
    pub const DIASTOLIC_BASE: i32 = 70;

    // Offsets indexed by dial position (Low, Med, High).
    pub const HEART_SYSTOLIC: [i32; 3] = [0, 10, 20];
    pub const HEART_DIASTOLIC: [i32; 3] = [0, 4, 8];
    pub const RESISTANCE_SYSTOLIC: [i32; 3] = [0, 6, 12];
    pub const RESISTANCE_DIASTOLIC: [i32; 3] = [0, 6, 12];
    pub const COMPLIANCE_SYSTOLIC: [i32; 3] = [8, 0, -8];
    pub const COMPLIANCE_DIASTOLIC: [i32; 3] = [-4, 0, 4];
    pub const SHUNT_SYSTOLIC: [i32; 3] = [0, -4, -8];
    pub const SHUNT_DIASTOLIC: [i32; 3] = [0, -3, -6];

    // Target bands per phase: (systolic lo, hi), (diastolic lo, hi).
    pub const PHASE_TARGETS: [((i32, i32), (i32, i32)); 3] = [
        ((118, 122), (76, 80)),
        ((98, 102), (68, 72)),
        ((138, 142), (84, 88)),
    ];
}

/// Ward puzzle (left face)
pub mod ward_constants {
    pub const WARD_OPTIONS: [&str; 6] = ["garlic", "hawthorn", "silver", "rowan", "mirror", "salt"];
    pub const WARD_CORRECT: &str = "hawthorn";
}

/// Constellation puzzle (top face)
pub mod constellation_constants {
    pub const PARAM_COUNT: usize = 5;
    pub const PARAM_NAMES: [&str; PARAM_COUNT] =
        ["ascension", "declination", "magnitude", "hue", "twinkle"];
    pub const PARAM_TARGETS: [f32; PARAM_COUNT] = [42.0, 17.0, 73.0, 58.0, 25.0];
    pub const PARAM_TOLERANCES: [f32; PARAM_COUNT] = [3.0, 4.0, 3.0, 4.0, 3.0];

    pub const PARAM_MIN: f32 = 0.0;
    pub const PARAM_MAX: f32 = 100.0;
}

/// Rice puzzle (right face)
pub mod rice_constants {
    pub const RICE_TARGET: i64 = 313;
}

/// Tincture puzzle (bottom face)
pub mod tincture_constants {
    pub const TINCTURE_TARGET: [i32; 3] = [2, 3, 1];
    pub const TINCTURE_SLIDER_MIN: i32 = 0;
    pub const TINCTURE_SLIDER_MAX: i32 = 5;
}

/// Generic game constants
pub mod game_constants {
    // Seed for the constellation scramble.
    pub const SEED: u64 = 69;

    pub const CONFIG_FILE_NAME: &str = "puzzlebox.toml";
    pub const CONFIG_ENV_VAR: &str = "PUZZLEBOX_CONFIG";

    pub const AMBIENT_TRACK_PATH: &str = "audio/ambient.ogg";

    // UI
    pub const UI_REFERENCE_HEIGHT: f32 = 1080.0;
    pub const STATUS_FONT_SIZE: f32 = 22.0;
    pub const FORM_FONT_SIZE: f32 = 26.0;
    pub const CERTIFICATE_FONT_SIZE: f32 = 48.0;
    pub const UI_MARGIN_PX: f32 = 16.0;
}
