//! Media and search-type classification.

/// Synonyms accepted for the movie media, joined into one string.
const MOVIE_SYNONYMS: &str = "movies films cinema";

/// Synonyms accepted for the TV media, joined into one string.
const TV_SYNONYMS: &str = "tv television t.v. tube tele";

/// The content category a session is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Media {
    /// Unrecognized media.
    Unknown,
    /// Movies.
    Movie,
    /// Television.
    Tv,
}

impl Media {
    /// Classifies free-form text into a media.
    ///
    /// Matching is case-insensitive substring containment within the
    /// joined synonym string, not token membership: any fragment of a
    /// synonym classifies. Movie synonyms are checked before TV ones;
    /// no match yields [`Media::Unknown`].
    #[must_use]
    pub fn classify(value: &str) -> Self {
        let needle = value.to_lowercase();
        if MOVIE_SYNONYMS.contains(&needle) {
            Self::Movie
        } else if TV_SYNONYMS.contains(&needle) {
            Self::Tv
        } else {
            Self::Unknown
        }
    }

    /// Name used as a route parameter (e.g. `genre/tv/list`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

/// Category parameter of the generic search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Production companies.
    Company,
    /// Collections of movies.
    Collection,
    /// Keywords.
    Keyword,
    /// Movies.
    Movie,
    /// Movies, TV shows and people at once.
    Multi,
    /// People.
    Person,
    /// TV shows.
    Tv,
}

impl SearchType {
    /// Name substituted into the `search/{}` and `{}/{}` routes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Collection => "collection",
            Self::Keyword => "keyword",
            Self::Movie => "movie",
            Self::Multi => "multi",
            Self::Person => "person",
            Self::Tv => "tv",
        }
    }
}
