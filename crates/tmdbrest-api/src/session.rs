//! TMDB sessions: payload building, call dispatch, and per-media
//! operations.

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::instrument;
use url::Url;

use crate::api::{LocalMovieApi, LocalTvApi};
use crate::entities::{
    Configuration, DailyTvPrograms, DailyTvProgramsCollection, Entity, Episode, Genre, Movie,
    Person, Season, Show,
};
use crate::error::{Error, Result};
use crate::media::{Media, SearchType};
use crate::routes::{API_ROOT, route_path};

/// Language tag used when none is supplied.
const DEFAULT_LANGUAGE: &str = "en-US";

/// User-Agent used when none is supplied.
const DEFAULT_USER_AGENT: &str = concat!("tmdbrest-api/", env!("CARGO_PKG_VERSION"));

/// Failure body TMDB attaches to rejected operations.
#[derive(Debug, Clone, Deserialize)]
struct ApiFailure {
    status_code: u32,
    status_message: String,
}

/// A configured client handle: API key, language, media affinity, and
/// the HTTP client every call goes through.
#[derive(Debug)]
pub struct Session {
    /// HTTP client.
    http_client: reqwest::Client,
    /// Base URL for API requests.
    base_url: Url,
    /// API key appended to every call.
    api_key: String,
    /// Language tag appended to every call.
    language: String,
    /// Media this session is scoped to.
    media: Media,
    /// Genre list, fetched on first access. Stays empty after a failed
    /// fetch so the next access re-attempts.
    genres: Mutex<Vec<Genre>>,
}

/// Builder for [`Session`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SessionBuilder {
    api_key: Option<String>,
    language: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    media: Media,
}

impl SessionBuilder {
    /// Creates a new builder.
    const fn new() -> Self {
        Self {
            api_key: None,
            language: None,
            base_url: None,
            user_agent: None,
            media: Media::Unknown,
        }
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the language tag (default: `en-US`; an empty value also
    /// falls back to the default).
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Overrides the base URL (for wiremock in tests).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the User-Agent (default: `tmdbrest-api/<version>`).
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Scopes the session to a media.
    #[must_use]
    pub const fn media(mut self, media: Media) -> Self {
        self.media = media;
        self
    }

    /// Builds the session.
    ///
    /// # Errors
    ///
    /// - `api_key` is not set.
    /// - The HTTP client cannot be constructed.
    pub fn build(self) -> Result<Session> {
        let api_key = self.api_key.ok_or(Error::Builder("api_key"))?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(API_ROOT)?,
        };

        let language = self
            .language
            .filter(|language| !language.is_empty())
            .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE));

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| String::from(DEFAULT_USER_AGENT));

        let http_client = reqwest::Client::builder()
            .user_agent(&user_agent)
            .gzip(true)
            .build()?;

        Ok(Session {
            http_client,
            base_url,
            api_key,
            language,
            media: self.media,
            genres: Mutex::new(Vec::new()),
        })
    }

    /// Builds a TV session.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionBuilder::build`].
    pub fn build_tv(self) -> Result<TvSession> {
        Ok(TvSession {
            session: self.media(Media::Tv).build()?,
        })
    }

    /// Builds a movie session.
    ///
    /// # Errors
    ///
    /// Same conditions as [`SessionBuilder::build`].
    pub fn build_movie(self) -> Result<MovieSession> {
        Ok(MovieSession {
            session: self.media(Media::Movie).build()?,
        })
    }
}

impl Session {
    /// Creates a new builder.
    #[must_use]
    pub const fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// The language tag this session sends.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The media this session is scoped to.
    #[must_use]
    pub const fn media(&self) -> Media {
        self.media
    }

    /// The HTTP client calls go through (shared with the image
    /// downloader).
    #[must_use]
    pub(crate) const fn http_client(&self) -> &reqwest::Client {
        &self.http_client
    }

    /// Base query pairs every call includes; callers append
    /// call-specific parameters before sending.
    #[must_use]
    pub fn payload(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("language", self.language.clone()),
        ]
    }

    /// Looks up `action` in the route table.
    fn route(&self, action: &str, params: &[&str]) -> Result<String> {
        route_path(action, params).ok_or_else(|| Error::NoRoute(String::from(action)))
    }

    /// Sends a GET for `path` and parses the body.
    ///
    /// Failure mapping is uniform for every call site: a non-success
    /// HTTP status or a `success: false` marker in the body becomes
    /// [`Error::Api`]; an undecodable body becomes [`Error::Json`].
    #[instrument(skip_all)]
    pub(crate) async fn get_json(
        &self,
        path: &str,
        extra: &[(&'static str, String)],
    ) -> Result<Value> {
        let url = self.base_url.join(path)?;
        let mut query = self.payload();
        query.extend(extra.iter().cloned());

        tracing::debug!(%url, "TMDB API request");

        let response = self.http_client.get(url).query(&query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::api_error(status.as_u16(), &body));
        }

        let value: Value = serde_json::from_str(&body).map_err(|source| Error::Json {
            endpoint: String::from(path),
            source,
        })?;

        // Rejected operations can come back with HTTP 200 and a
        // `success: false` marker in the body.
        if value.get("success").and_then(Value::as_bool) == Some(false) {
            return Err(Self::api_error(status.as_u16(), &body));
        }

        Ok(value)
    }

    /// Maps a failure body to [`Error::Api`], keeping the raw body as
    /// the message when it does not decode.
    fn api_error(http_status: u16, body: &str) -> Error {
        serde_json::from_str::<ApiFailure>(body).map_or_else(
            |_| Error::Api {
                http_status,
                status_code: 0,
                status_message: String::from(body),
            },
            |failure| Error::Api {
                http_status,
                status_code: failure.status_code,
                status_message: failure.status_message,
            },
        )
    }

    /// Generic search against the `find` endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    #[instrument(skip_all)]
    pub async fn search(&self, query: &str, search_type: SearchType) -> Result<Value> {
        let path = self.route("find", &[search_type.as_str()])?;
        self.get_json(&path, &[("query", String::from(query))])
            .await
    }

    /// Fetches one item by id for the given search type.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    #[instrument(skip_all)]
    pub async fn get_item(&self, id: u64, search_type: SearchType) -> Result<Value> {
        let path = self.route("item", &[search_type.as_str(), &id.to_string()])?;
        self.get_json(&path, &[]).await
    }

    /// Fetches one season of a show.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    #[instrument(skip_all)]
    pub async fn get_season(&self, show_id: u64, season_no: u64) -> Result<Value> {
        let path = self.route("season", &[&show_id.to_string(), &season_no.to_string()])?;
        self.get_json(&path, &[]).await
    }

    /// Fetches one person by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    #[instrument(skip_all)]
    pub async fn get_person(&self, person_id: u64) -> Result<Person> {
        let path = self.route("person", &[&person_id.to_string()])?;
        Ok(Person::new(self.get_json(&path, &[]).await?))
    }

    /// Fetches the site configuration (image base URLs and size
    /// tokens).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the API reports a
    /// failure.
    #[instrument(skip_all)]
    pub async fn configuration(&self) -> Result<Configuration> {
        let path = self.route("config", &[])?;
        Ok(Configuration::new(self.get_json(&path, &[]).await?))
    }

    /// Genre list for this session's media, fetched on first access and
    /// cached for the session's lifetime.
    ///
    /// A failed fetch leaves the cache empty, so the next access tries
    /// the network again.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the response carries no
    /// `genres` list.
    #[instrument(skip_all)]
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        let mut cache = self.genres.lock().await;
        if cache.is_empty() {
            let path = self.route("genres", &[self.media.as_str()])?;
            let value = self.get_json(&path, &[]).await?;
            let raw = value
                .get("genres")
                .and_then(Value::as_array)
                .ok_or_else(|| Error::Shape {
                    endpoint: path,
                    key: "genres",
                })?;
            let pairs = raw
                .iter()
                .filter_map(|genre| {
                    Some((
                        genre.get("id")?.as_u64()?,
                        genre.get("name")?.as_str()?.to_owned(),
                    ))
                })
                .collect();
            *cache = Genre::load(pairs);
        }
        Ok(cache.clone())
    }
}

/// Session scoped to television content.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct TvSession {
    session: Session,
}

impl TvSession {
    /// The underlying generic session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

impl LocalTvApi for TvSession {
    #[instrument(skip_all)]
    async fn search_show(&self, name: &str, exact: bool) -> Result<Vec<Show>> {
        let response = self.session.search(name, SearchType::Tv).await?;
        let results = response
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Shape {
                endpoint: String::from("search/tv"),
                key: "results",
            })?;
        let shows: Vec<Show> = results.iter().cloned().map(Show::new).collect();

        if exact {
            let needle = name.to_lowercase();
            return Ok(shows
                .into_iter()
                .filter(|show| show.name().to_lowercase() == needle)
                .collect());
        }
        Ok(shows)
    }

    #[instrument(skip_all)]
    async fn get_show(&self, show_id: u64) -> Result<Show> {
        Ok(Show::new(
            self.session.get_item(show_id, SearchType::Tv).await?,
        ))
    }

    #[instrument(skip_all)]
    async fn get_show_and_seasons(&self, show_id: u64) -> Result<(Show, Vec<Season>)> {
        let show = self.get_show(show_id).await?;
        let mut seasons = Vec::new();
        for season_no in 1..=show.tot_seasons() {
            let value = self.session.get_season(show_id, season_no).await?;
            seasons.push(Season::parse_season(value));
        }
        Ok((show, seasons))
    }

    #[instrument(skip_all)]
    async fn get_episode(
        &self,
        show_id: u64,
        season_no: u64,
        episode_no: u64,
    ) -> Result<Episode> {
        let path = self.session.route(
            "episode",
            &[
                &show_id.to_string(),
                &season_no.to_string(),
                &episode_no.to_string(),
            ],
        )?;
        Ok(Episode::new(self.session.get_json(&path, &[]).await?))
    }

    #[instrument(skip_all)]
    async fn airing_today(&self) -> Result<DailyTvProgramsCollection> {
        let path = self.session.route("airing_today", &[])?;

        // First page with the server's default page number.
        let first = DailyTvPrograms::new(self.session.get_json(&path, &[]).await?);
        let total_pages = first.total_pages();

        let mut collection = DailyTvProgramsCollection::new();
        collection.add_page(first);

        // Remaining pages, sequential and ascending. A single-page
        // listing never enters the loop.
        for page in 2..=total_pages {
            let value = self
                .session
                .get_json(&path, &[("page", page.to_string())])
                .await?;
            collection.add_page(DailyTvPrograms::new(value));
        }
        Ok(collection)
    }
}

/// Session scoped to movie content.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct MovieSession {
    session: Session,
}

impl MovieSession {
    /// The underlying generic session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }
}

impl LocalMovieApi for MovieSession {
    #[instrument(skip_all)]
    async fn search_movie(&self, title: &str, exact: bool) -> Result<Vec<Movie>> {
        let response = self.session.search(title, SearchType::Movie).await?;
        let results = response
            .get("results")
            .and_then(Value::as_array)
            .ok_or_else(|| Error::Shape {
                endpoint: String::from("search/movie"),
                key: "results",
            })?;
        let movies: Vec<Movie> = results.iter().cloned().map(Movie::new).collect();

        if exact {
            let needle = title.to_lowercase();
            return Ok(movies
                .into_iter()
                .filter(|movie| movie.title().to_lowercase() == needle)
                .collect());
        }
        Ok(movies)
    }

    #[instrument(skip_all)]
    async fn get_movie(&self, movie_id: u64) -> Result<Movie> {
        Ok(Movie::new(
            self.session.get_item(movie_id, SearchType::Movie).await?,
        ))
    }
}

/// A media-scoped session produced by [`session_factory`].
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub enum MediaSession {
    /// Television session.
    Tv(TvSession),
    /// Movie session.
    Movie(MovieSession),
}

/// Builds the session matching a media-name synonym.
///
/// Accepts any synonym recognized by [`Media::classify`]
/// (e.g. `"films"`, `"television"`).
///
/// # Errors
///
/// - [`Error::UnknownMedia`] when `media_type` matches no synonym.
/// - Builder errors from the underlying session construction.
pub fn session_factory(
    media_type: &str,
    api_key: &str,
    language: Option<&str>,
) -> Result<MediaSession> {
    let mut builder = Session::builder().api_key(api_key);
    if let Some(language) = language {
        builder = builder.language(language);
    }

    match Media::classify(media_type) {
        Media::Movie => Ok(MediaSession::Movie(builder.build_movie()?)),
        Media::Tv => Ok(MediaSession::Tv(builder.build_tv()?)),
        Media::Unknown => Err(Error::UnknownMedia(String::from(media_type))),
    }
}
