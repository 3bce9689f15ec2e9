//! Display fallbacks for rooms created without an image or description.

const SUITE_IMAGE: &str =
    "https://images.unsplash.com/photo-1445019980597-93fa8acb246c?auto=format&fit=crop&w=1600&q=80";
const DELUXE_IMAGE: &str =
    "https://images.unsplash.com/photo-1618773928121-c32242e63f39?auto=format&fit=crop&w=1600&q=80";
const FAMILY_IMAGE: &str =
    "https://images.unsplash.com/photo-1582719508461-905c673771fd?auto=format&fit=crop&w=1600&q=80";
const STANDARD_IMAGE: &str =
    "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267?auto=format&fit=crop&w=1600&q=80";

/// Presentation category derived from a free-text room type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomPresentation {
    Suite,
    Deluxe,
    Family,
    Standard,
}

impl RoomPresentation {
    /// Keyword match on the lower-cased type. `suite` wins over
    /// `deluxe`/`premium`, which win over `family`.
    pub fn for_room_type(room_type: &str) -> Self {
        let normalized = room_type.to_lowercase();
        if normalized.contains("suite") {
            Self::Suite
        } else if normalized.contains("deluxe") || normalized.contains("premium") {
            Self::Deluxe
        } else if normalized.contains("family") {
            Self::Family
        } else {
            Self::Standard
        }
    }

    pub fn default_image_url(self) -> &'static str {
        match self {
            Self::Suite => SUITE_IMAGE,
            Self::Deluxe => DELUXE_IMAGE,
            Self::Family => FAMILY_IMAGE,
            Self::Standard => STANDARD_IMAGE,
        }
    }

    pub fn default_description(self) -> &'static str {
        match self {
            Self::Suite => "Premium suite with panoramic city view and extended lounge zone.",
            Self::Deluxe => "Refined interior with quiet atmosphere for business and leisure stays.",
            Self::Family => "Spacious layout designed for group travel and longer accommodation.",
            Self::Standard => "Balanced comfort with essential in-room amenities.",
        }
    }

    /// The candidate URL when it is a site-relative path or an http(s)
    /// URL, else the category default.
    pub fn resolve_image_url(candidate: Option<&str>, room_type: &str) -> String {
        match candidate.map(str::trim) {
            Some(url)
                if url.starts_with('/')
                    || url.starts_with("http://")
                    || url.starts_with("https://") =>
            {
                url.to_string()
            }
            _ => Self::for_room_type(room_type).default_image_url().to_string(),
        }
    }

    pub fn resolve_short_description(candidate: Option<&str>, room_type: &str) -> String {
        match candidate.map(str::trim) {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => Self::for_room_type(room_type).default_description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_category_by_keyword() {
        assert_eq!(RoomPresentation::for_room_type("Junior Suite"), RoomPresentation::Suite);
        assert_eq!(RoomPresentation::for_room_type("PREMIUM king"), RoomPresentation::Deluxe);
        assert_eq!(RoomPresentation::for_room_type("Family room"), RoomPresentation::Family);
        assert_eq!(RoomPresentation::for_room_type("Single"), RoomPresentation::Standard);
        assert_eq!(
            RoomPresentation::for_room_type("Deluxe Family Suite"),
            RoomPresentation::Suite
        );
    }

    #[test]
    fn keeps_only_acceptable_image_urls() {
        assert_eq!(
            RoomPresentation::resolve_image_url(Some(" /uploads/101.jpg "), "Single"),
            "/uploads/101.jpg"
        );
        assert_eq!(
            RoomPresentation::resolve_image_url(Some("https://cdn.example.com/a.png"), "Single"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(
            RoomPresentation::resolve_image_url(Some("ftp://files/a.png"), "Suite"),
            SUITE_IMAGE
        );
        assert_eq!(RoomPresentation::resolve_image_url(None, "Single"), STANDARD_IMAGE);
    }

    #[test]
    fn blank_description_falls_back() {
        assert_eq!(
            RoomPresentation::resolve_short_description(Some("  "), "Family"),
            "Spacious layout designed for group travel and longer accommodation."
        );
        assert_eq!(
            RoomPresentation::resolve_short_description(Some(" Sea view "), "Family"),
            "Sea view"
        );
    }
}
