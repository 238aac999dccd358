//! Built-in blueprint photoshoot templates.
//!
//! One template per vibe, four frames each. Every rotating token used here
//! has an authored slot in [`crate::catalog`] for each partition of that
//! vibe, so injection of a built-in template never leaves residual markers.

/// Frames rendered per feed generation.
pub const FRAMES_PER_FEED: usize = 4;

const LUXURY_DARK_MOODY: &str = "\
--- FRAME 1 ---
Editorial full-body fashion photograph, subject wearing {{OUTFIT_FULLBODY_1}}, \
{{LOCATION_OUTDOOR_1}}, {{LIGHTING_EVENING}}, shot on 85mm at f/1.8, \
confident relaxed posture, cinematic color grade with deep blacks.

--- FRAME 2 ---
Three-quarter fashion portrait, subject wearing {{OUTFIT_FULLBODY_2}}, \
{{LOCATION_INDOOR_1}}, {{LIGHTING_AMBIENT}}, accessorized with {{ACCESSORY_1}}, \
gaze slightly off-camera, shallow depth of field, muted luxury palette.

--- FRAME 3 ---
Detail close-up, {{OUTFIT_CLOSEUP_1}}, {{LIGHTING_STUDIO}}, macro texture \
emphasis, {{ACCESSORY_2}} visible at frame edge, high-contrast editorial finish.

--- FRAME 4 ---
Wide environmental shot, subject small in frame wearing {{OUTFIT_FULLBODY_1}}, \
{{LOCATION_OUTDOOR_1}}, {{LIGHTING_GOLDEN_HOUR}}, strong leading lines, \
moody atmospheric haze, magazine cover composition.
";

const URBAN_EDITORIAL: &str = "\
--- FRAME 1 ---
Candid street-style photograph, subject wearing {{OUTFIT_FULLBODY_1}}, \
{{LOCATION_OUTDOOR_1}}, {{LIGHTING_GOLDEN_HOUR}}, 35mm documentary framing, \
mid-motion, natural unposed energy.

--- FRAME 2 ---
Urban portrait, subject wearing {{OUTFIT_FULLBODY_2}}, {{LOCATION_INDOOR_1}}, \
{{LIGHTING_AMBIENT}}, wearing {{ACCESSORY_1}}, direct eye contact, \
grainy film emulation.

--- FRAME 3 ---
Texture detail shot, {{OUTFIT_CLOSEUP_1}}, {{LIGHTING_STUDIO}}, \
{{ACCESSORY_2}} in soft focus behind, desaturated editorial tone.

--- FRAME 4 ---
Full-length walking shot, subject wearing {{OUTFIT_FULLBODY_1}}, \
{{LOCATION_OUTDOOR_1}}, {{LIGHTING_EVENING}}, motion blur on background \
traffic, off-center composition with negative space.
";

/// The blueprint template for a vibe, if one is authored.
pub fn photoshoot_template(vibe: &str) -> Option<&'static str> {
    match vibe {
        "luxury_dark_moody" => Some(LUXURY_DARK_MOODY),
        "urban_editorial" => Some(URBAN_EDITORIAL),
        _ => None,
    }
}
