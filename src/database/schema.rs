// SQL applied at startup; the events table is append-only and carries no
// versioned migrations.

pub const EVENTS_SCHEMA: &str = include_str!("../../migrations/001_events.sql");
