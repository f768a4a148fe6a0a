/// A fetched ticket, reduced to the two fields branch naming needs.
///
/// Tracker-specific schemas (`fields["System.Title"]`, `fields.summary`)
/// stay inside the infra clients; everything downstream sees this shape.
#[derive(Debug, Clone)]
pub struct Ticket {
    pub id: String,
    pub title: String,
}
