//! Static page copy for the three site pages.
//!
//! Everything here is carried verbatim from the production site so the page
//! components stay purely presentational. The call-to-action URL is an
//! opaque string handed to the OS opener; it is never validated or polled.

pub mod landing;
pub mod legal;
pub mod profile;

/// External chat-commerce link, the sole call-to-action target.
pub const CTA_URL: &str = "https://line.me/R/ti/p/@526oqrxm?ts=02041820&oat_content=url";

pub const BRAND: &str = "HLAL";
pub const BRAND_TAGLINE: &str = "HumanLife : AI Logic";
pub const FOOTER_TEAM: &str = "Team HAYATO | HLAL";
pub const FOOTER_COPYRIGHT: &str = "© 2026 All Rights Reserved.";
