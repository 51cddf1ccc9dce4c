//! Parallax drift for the decorative hero particles.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config;

/// Speed factor for the particle at `index`. Later particles drift faster,
/// which is what sells the depth illusion.
pub fn particle_speed(index: usize) -> f64 {
    config::PARALLAX_BASE_SPEED + index as f64 * config::PARALLAX_SPEED_STEP
}

/// Vertical translation for a particle at the given scroll position.
pub fn particle_offset(scroll_y: f64, index: usize) -> f64 {
    -(scroll_y * particle_speed(index))
}

/// Repositions every particle for the current scroll position. Pure
/// function of scroll position and particle index; runs on every scroll
/// event, unthrottled.
pub fn apply(document: &Document, scroll_y: f64) {
    let particles = match document.query_selector_all(".particle") {
        Ok(particles) => particles,
        Err(_) => return,
    };
    for index in 0..particles.length() {
        if let Some(particle) = particles
            .item(index)
            .and_then(|node| node.dyn_into::<HtmlElement>().ok())
        {
            let offset = particle_offset(scroll_y, index as usize);
            let _ = particle
                .style()
                .set_property("transform", &format!("translateY({}px)", offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{particle_offset, particle_speed};

    #[test]
    fn speed_ramps_by_index() {
        assert_eq!(particle_speed(0), 0.5);
        assert_eq!(particle_speed(1), 0.6);
        assert_eq!(particle_speed(5), 1.0);
    }

    #[test]
    fn particles_drift_against_the_scroll() {
        assert_eq!(particle_offset(200.0, 0), -100.0);
        assert_eq!(particle_offset(200.0, 5), -200.0);
        assert_eq!(particle_offset(0.0, 3), 0.0);
    }
}
