//! Overlay text. Layout and font rendering are left to the host; this
//! only decides what the instruction panel and hover panel say.

use crate::core::bodies::OrbitingBody;

/// Instruction panel lines, top to bottom.
pub fn instructions(pause_key: char) -> Vec<String> {
    vec![
        "Instructions:".to_string(),
        format!("- Press '{}' to pause/resume", pause_key.to_ascii_lowercase()),
        "- Hover over planet for info".to_string(),
        "- Click Sun/planet to remove".to_string(),
    ]
}

/// Hover panel text: name and distance, then the fact on its own line.
pub fn hover_caption(body: &OrbitingBody) -> String {
    format!(
        "{}, Distance: {:.3} AU\nFact: {}",
        body.name, body.scaled_distance, body.fact
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bodies::{reference_planets, reference_sun, BodyRegistry};
    use glam::DVec2;

    #[test]
    fn instructions_name_the_pause_key() {
        let lines = instructions('S');
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "- Press 's' to pause/resume");
    }

    #[test]
    fn caption_formats_distance_to_three_places() {
        let reg =
            BodyRegistry::initialize(&reference_sun(), &reference_planets(), DVec2::ZERO).unwrap();
        let caption = hover_caption(reg.find("Earth").unwrap());
        assert!(caption.starts_with("Earth, Distance: 1.000 AU\nFact: Earth is"), "{caption}");
    }
}
