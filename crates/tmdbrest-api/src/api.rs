//! API operation traits.
#![allow(clippy::future_not_send)]

use crate::entities::{DailyTvProgramsCollection, Episode, Movie, Season, Show};
use crate::error::Result;

/// Television operations.
///
/// Abstracts the TV session for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TvApi: Send)]
pub trait LocalTvApi {
    /// Searches TV shows by name.
    ///
    /// With `exact`, keeps only shows whose name equals `name`
    /// case-insensitively; the result is empty when none match.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// failure, or the response shape is unexpected.
    async fn search_show(&self, name: &str, exact: bool) -> Result<Vec<Show>>;

    /// Fetches one show by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    async fn get_show(&self, show_id: u64) -> Result<Show>;

    /// Fetches a show and every one of its seasons, one sequential call
    /// per season number from 1 through the reported season count.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the underlying calls fails.
    async fn get_show_and_seasons(&self, show_id: u64) -> Result<(Show, Vec<Season>)>;

    /// Fetches one episode of a show.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    async fn get_episode(
        &self,
        show_id: u64,
        season_no: u64,
        episode_no: u64,
    ) -> Result<Episode>;

    /// Fetches every page of today's airing programs, sequentially and
    /// in ascending page order.
    ///
    /// # Errors
    ///
    /// Returns an error if any page fetch fails.
    async fn airing_today(&self) -> Result<DailyTvProgramsCollection>;
}

/// Movie operations.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(MovieApi: Send)]
pub trait LocalMovieApi {
    /// Searches movies by title.
    ///
    /// With `exact`, keeps only movies whose title equals `title`
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails, the API reports a
    /// failure, or the response shape is unexpected.
    async fn search_movie(&self, title: &str, exact: bool) -> Result<Vec<Movie>>;

    /// Fetches one movie by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    async fn get_movie(&self, movie_id: u64) -> Result<Movie>;
}
