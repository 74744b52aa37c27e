//! Outbound link builders for phone calls, WhatsApp and map searches
//!
//! These are fire-and-forget URLs handed to the browser.

use serde::Serialize;

use crate::models::Artisan;

const WHATSAPP_BASE_URL: &str = "https://wa.me";
const MAP_SEARCH_BASE_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// `tel:` URI keeping a leading `+` and the digits
#[must_use]
pub fn tel_link(phone: &str) -> String {
    let trimmed = phone.trim();
    let digits = digits_only(trimmed);
    if trimmed.starts_with('+') {
        format!("tel:+{digits}")
    } else {
        format!("tel:{digits}")
    }
}

/// WhatsApp click-to-chat link, optionally with a prefilled message
#[must_use]
pub fn whatsapp_link(phone: &str, message: Option<&str>) -> String {
    let base = format!("{WHATSAPP_BASE_URL}/{}", digits_only(phone));
    match message {
        Some(text) if !text.is_empty() => format!("{base}?text={}", urlencoding::encode(text)),
        _ => base,
    }
}

#[must_use]
pub fn map_search_link(query: &str) -> String {
    format!("{MAP_SEARCH_BASE_URL}{}", urlencoding::encode(query.trim()))
}

fn digits_only(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Contact links rendered on an artisan card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactLinks {
    pub call: String,
    pub whatsapp: String,
    pub map: String,
}

impl From<&Artisan> for ContactLinks {
    fn from(artisan: &Artisan) -> Self {
        let greeting = format!(
            "Hello {}, I found your {} work on TravelGems and would like to visit.",
            artisan.name, artisan.craft
        );
        Self {
            call: tel_link(&artisan.phone),
            whatsapp: whatsapp_link(&artisan.phone, Some(&greeting)),
            map: artisan
                .map_link
                .clone()
                .unwrap_or_else(|| map_search_link(&format!("{} {}", artisan.name, artisan.location))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tel_link_keeps_plus() {
        assert_eq!(tel_link("+91 98450 12345"), "tel:+919845012345");
        assert_eq!(tel_link("0821-2420000"), "tel:08212420000");
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(whatsapp_link("+91 98450 12345", None), "https://wa.me/919845012345");
        assert_eq!(
            whatsapp_link("+91 98450 12345", Some("Hi there")),
            "https://wa.me/919845012345?text=Hi%20there"
        );
    }

    #[test]
    fn test_map_search_link_encodes_query() {
        assert_eq!(
            map_search_link("Agrahara, Mysuru"),
            "https://www.google.com/maps/search/?api=1&query=Agrahara%2C%20Mysuru"
        );
    }

    #[test]
    fn test_artisan_contact_links_fall_back_to_search() {
        let artisan = Artisan {
            id: "a".to_string(),
            name: "Manjunath".to_string(),
            craft: "Ganjifa".to_string(),
            story: String::new(),
            location: "Mysuru".to_string(),
            phone: "+91 97400 34567".to_string(),
            map_link: None,
        };
        let links = ContactLinks::from(&artisan);
        assert_eq!(links.call, "tel:+919740034567");
        assert!(links.whatsapp.starts_with("https://wa.me/919740034567?text="));
        assert!(links.map.ends_with("Manjunath%20Mysuru"));

        let curated = Artisan {
            map_link: Some("https://maps.google.com/?q=1,2".to_string()),
            ..artisan
        };
        assert_eq!(ContactLinks::from(&curated).map, "https://maps.google.com/?q=1,2");
    }
}
