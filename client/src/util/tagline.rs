//! Random tagline for the hero headline.
//!
//! Server rendering always uses [`SSR_TAGLINE`] so the first pass is
//! deterministic; the browser re-picks after hydration.

#[cfg(test)]
#[path = "tagline_test.rs"]
mod tagline_test;

/// Tagline words rotated through the hero headline.
pub const TAGLINES: [&str; 4] = ["memorable", "accessible", "responsive", "beautiful"];

/// Tagline used for server-rendered output.
pub const SSR_TAGLINE: &str = "beautiful";

/// Pick a tagline at random.
///
/// Outside the browser build this is deterministic and returns
/// [`SSR_TAGLINE`].
pub fn random_tagline() -> &'static str {
    #[cfg(feature = "hydrate")]
    {
        let index = (js_sys::Math::random() * TAGLINES.len() as f64) as usize;
        TAGLINES.get(index).copied().unwrap_or(SSR_TAGLINE)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SSR_TAGLINE
    }
}
