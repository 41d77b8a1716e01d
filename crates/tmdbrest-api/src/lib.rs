//! Client library for The Movie Database (TMDB) v3 REST API.
//!
//! Builds endpoint URLs from a static route table, issues HTTP GET
//! requests with query-string credentials, and wraps the returned JSON
//! in read-only entity views. Sessions are scoped to a media (TV or
//! movie) and obtained from [`session_factory`] or the session builder.

mod api;
/// Read-only entity views over parsed TMDB JSON.
pub mod entities;
mod error;
mod images;
mod media;
mod routes;
mod session;

pub use api::{LocalMovieApi, LocalTvApi, MovieApi, TvApi};
pub use error::{Error, Result};
pub use images::download;
pub use media::{Media, SearchType};
pub use routes::{API_ROOT, build_url, route_path};
pub use session::{
    MediaSession, MovieSession, Session, SessionBuilder, TvSession, session_factory,
};
