use crate::schema::TesselConfig;

use super::helpers::validate_color;

pub(super) fn validate_colors(errors: &mut Vec<String>, config: &TesselConfig) {
    validate_color(
        errors,
        "settings.backgroundColor",
        &config.settings.background_color,
    );
}
