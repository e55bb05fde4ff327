//! Navigation targets emitted by the board. The destinations themselves live
//! elsewhere in the host app.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::RouteConfig;
use crate::models::TicketId;

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

pub fn add_href(routes: &RouteConfig) -> String {
    routes.add.clone()
}

pub fn details_href(routes: &RouteConfig, id: &TicketId) -> String {
    format!(
        "{}/{}",
        routes.details.trim_end_matches('/'),
        utf8_percent_encode(id.as_str(), SEGMENT)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_href() {
        let routes = RouteConfig::default();
        assert_eq!(details_href(&routes, &TicketId::from(1)), "/details/1");
        assert_eq!(add_href(&routes), "/add");
    }

    #[test]
    fn test_details_href_escapes_segment() {
        let routes = RouteConfig {
            details: "/tickets/".to_string(),
            ..RouteConfig::default()
        };
        assert_eq!(
            details_href(&routes, &TicketId::from("a/b c?")),
            "/tickets/a%2Fb%20c%3F"
        );
    }
}
