//! Screen view models
//!
//! Everything a screen needs besides rendering: routes and the guard,
//! list loading with client-side joins and search, form submission, and
//! the Quran pager. Rendering itself is left to whatever front end drives
//! these types.

pub mod form;
pub mod guard;
pub mod join;
pub mod lists;
pub mod login;
pub mod quran;
pub mod routes;
pub mod table;

pub use form::{FormDraft, FormMode, FormOutcome};
pub use guard::{guard, GuardDecision};
pub use join::{index_by_key, Enriched, Joined};
pub use lists::DashboardView;
pub use login::LoginForm;
pub use quran::QuranPager;
pub use routes::Route;
pub use table::{DeleteOutcome, LoadState, Searchable, TableView};
