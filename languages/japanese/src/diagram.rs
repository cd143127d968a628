use accent_config::render::RenderConfig;
use accent_core::Result;
use svg::Document;
use svg::node::element::{Circle, Polyline, Text};

use crate::kana;
use crate::pitch_accent::PitchPattern;

const LABEL_HEIGHT: f32 = 20.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const DEVOICED_DASH: &str = "2,2";

/// Drawing parameters for pitch diagrams
#[derive(Debug, Clone, PartialEq)]
pub struct PitchStyle {
    pub step: f32,
    pub margin: f32,
    pub high_y: f32,
    pub low_y: f32,
    pub radius: f32,
    pub stroke_width: f32,
    pub color: String,
    pub label: bool,
}

impl Default for PitchStyle {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for PitchStyle {
    fn from(config: &RenderConfig) -> Self {
        Self {
            step: config.step,
            margin: config.margin,
            high_y: config.high_y,
            low_y: config.low_y,
            radius: config.radius,
            stroke_width: config.stroke_width,
            color: config.color.clone(),
            label: config.label,
        }
    }
}

/// Render an accent pattern string with the default style
pub fn gen_pitch_svg(accent_pattern: &str) -> Result<String> {
    let pattern = PitchPattern::parse(accent_pattern)?;
    Ok(render_svg(&pattern, &PitchStyle::default()))
}

/// Render a parsed pattern: one filled marker per mora (dashed and hollow
/// when devoiced), a hollow marker for the following particle, and the
/// contour joining them.
pub fn render_svg(pattern: &PitchPattern, style: &PitchStyle) -> String {
    let labelled = style.label && pattern.morae.len() == pattern.mora_count;

    let width = (pattern.mora_count + 1) as f32 * style.step + 2.0 * style.margin;
    let mut height = style.low_y + style.radius + style.margin;
    if labelled {
        height += LABEL_HEIGHT;
    }

    let x = |i: usize| style.margin + style.step * i as f32 + style.step / 2.0;
    let y = |high: bool| if high { style.high_y } else { style.low_y };

    let mut points: Vec<(f32, f32)> = pattern
        .contour()
        .into_iter()
        .enumerate()
        .map(|(i, high)| (x(i), y(high)))
        .collect();
    let particle = (x(pattern.mora_count), y(pattern.particle_is_high()));
    points.push(particle);

    let contour = Polyline::new()
        .set(
            "points",
            points
                .iter()
                .map(|(px, py)| format!("{px},{py}"))
                .collect::<Vec<_>>()
                .join(" "),
        )
        .set("fill", "none")
        .set("stroke", style.color.as_str())
        .set("stroke-width", style.stroke_width);

    let mut document = Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", format!("0 0 {width} {height}"))
        .add(contour);

    for (i, &(cx, cy)) in points[..pattern.mora_count].iter().enumerate() {
        let marker = Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", style.radius);

        // Devoiced morae are drawn hollow and dashed
        let marker = if pattern.is_devoiced(i + 1) {
            marker
                .set("fill", "white")
                .set("stroke", style.color.as_str())
                .set("stroke-width", style.stroke_width)
                .set("stroke-dasharray", DEVOICED_DASH)
        } else {
            marker.set("fill", style.color.as_str())
        };
        document = document.add(marker);
    }

    document = document.add(
        Circle::new()
            .set("cx", particle.0)
            .set("cy", particle.1)
            .set("r", style.radius)
            .set("fill", "white")
            .set("stroke", style.color.as_str())
            .set("stroke-width", style.stroke_width),
    );

    if labelled {
        let label_y = height - style.margin / 2.0;
        for (i, mora) in pattern.morae.iter().enumerate() {
            document = document.add(
                Text::new(kana::circle_mora(mora))
                    .set("x", x(i))
                    .set("y", label_y)
                    .set("text-anchor", "middle")
                    .set("font-size", LABEL_FONT_SIZE)
                    .set("fill", style.color.as_str()),
            );
        }
    }

    tracing::debug!(
        "Rendered pitch diagram {} ({} morae)",
        pattern.notation(),
        pattern.mora_count
    );

    document.to_string()
}
