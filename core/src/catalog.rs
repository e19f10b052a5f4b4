//! The remote operations, described as data.
//!
//! # Design
//! Each Jikan operation is an `Endpoint` variant: a path template plus the
//! typed arguments that fill it. `Endpoint::path` renders the template and the
//! query suffix; `JikanClient::fetch` sends it. Adding an operation means
//! adding a variant and a match arm, not another async method.
//!
//! Numeric identifiers are formatted as plain decimals. String identifiers
//! (usernames) go through the same percent-encoding as query values.
//!
//! `Endpoint` and the query structs implement `Deserialize` with an adjacent
//! `{"kind": ..., "args": ...}` tag, so endpoint lists can be loaded from
//! JSON (see `test-vectors/endpoints.json`).

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::JikanClient;
use crate::query::{encode_component, ParameterSet};
use crate::types::CallResult;

/// Types that render into a `ParameterSet`. Field order is parameter order.
pub trait ToParams {
    fn to_params(&self) -> ParameterSet;
}

// ---------------------------------------------------------------------------
// Sub-resources
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnimeResource {
    Overview,
    Full,
    Characters,
    Staff,
    Episodes,
    News,
    Forum,
    Videos,
    VideosEpisodes,
    Pictures,
    Statistics,
    MoreInfo,
    Recommendations,
    UserUpdates,
    Reviews,
    Relations,
    Themes,
    External,
    Streaming,
}

impl AnimeResource {
    fn segment(self) -> Option<&'static str> {
        Some(match self {
            AnimeResource::Overview => return None,
            AnimeResource::Full => "full",
            AnimeResource::Characters => "characters",
            AnimeResource::Staff => "staff",
            AnimeResource::Episodes => "episodes",
            AnimeResource::News => "news",
            AnimeResource::Forum => "forum",
            AnimeResource::Videos => "videos",
            AnimeResource::VideosEpisodes => "videos/episodes",
            AnimeResource::Pictures => "pictures",
            AnimeResource::Statistics => "statistics",
            AnimeResource::MoreInfo => "moreinfo",
            AnimeResource::Recommendations => "recommendations",
            AnimeResource::UserUpdates => "userupdates",
            AnimeResource::Reviews => "reviews",
            AnimeResource::Relations => "relations",
            AnimeResource::Themes => "themes",
            AnimeResource::External => "external",
            AnimeResource::Streaming => "streaming",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangaResource {
    Overview,
    Full,
    Characters,
    News,
    Forum,
    Pictures,
    Statistics,
    MoreInfo,
    Recommendations,
    UserUpdates,
    Reviews,
    Relations,
    External,
}

impl MangaResource {
    fn segment(self) -> Option<&'static str> {
        Some(match self {
            MangaResource::Overview => return None,
            MangaResource::Full => "full",
            MangaResource::Characters => "characters",
            MangaResource::News => "news",
            MangaResource::Forum => "forum",
            MangaResource::Pictures => "pictures",
            MangaResource::Statistics => "statistics",
            MangaResource::MoreInfo => "moreinfo",
            MangaResource::Recommendations => "recommendations",
            MangaResource::UserUpdates => "userupdates",
            MangaResource::Reviews => "reviews",
            MangaResource::Relations => "relations",
            MangaResource::External => "external",
        })
    }
}

/// Sub-resources shared by characters and people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterResource {
    Overview,
    Full,
    Anime,
    Manga,
    Voices,
    Pictures,
}

impl CharacterResource {
    fn segment(self) -> Option<&'static str> {
        Some(match self {
            CharacterResource::Overview => return None,
            CharacterResource::Full => "full",
            CharacterResource::Anime => "anime",
            CharacterResource::Manga => "manga",
            CharacterResource::Voices => "voices",
            CharacterResource::Pictures => "pictures",
        })
    }
}

pub type PersonResource = CharacterResource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClubResource {
    Overview,
    Members,
    Staff,
    Relations,
}

impl ClubResource {
    fn segment(self) -> Option<&'static str> {
        Some(match self {
            ClubResource::Overview => return None,
            ClubResource::Members => "members",
            ClubResource::Staff => "staff",
            ClubResource::Relations => "relations",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducerResource {
    Overview,
    Full,
    External,
}

impl ProducerResource {
    fn segment(self) -> Option<&'static str> {
        match self {
            ProducerResource::Overview => None,
            ProducerResource::Full => Some("full"),
            ProducerResource::External => Some("external"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserResource {
    Profile,
    Full,
    Statistics,
    Favorites,
    UserUpdates,
    About,
    History,
    Friends,
    Reviews,
    Recommendations,
    Clubs,
    External,
    AnimeList,
    MangaList,
}

impl UserResource {
    fn segment(self) -> Option<&'static str> {
        Some(match self {
            UserResource::Profile => return None,
            UserResource::Full => "full",
            UserResource::Statistics => "statistics",
            UserResource::Favorites => "favorites",
            UserResource::UserUpdates => "userupdates",
            UserResource::About => "about",
            UserResource::History => "history",
            UserResource::Friends => "friends",
            UserResource::Reviews => "reviews",
            UserResource::Recommendations => "recommendations",
            UserResource::Clubs => "clubs",
            UserResource::External => "external",
            UserResource::AnimeList => "animelist",
            UserResource::MangaList => "mangalist",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Anime,
    Manga,
}

impl MediaKind {
    fn as_str(self) -> &'static str {
        match self {
            MediaKind::Anime => "anime",
            MediaKind::Manga => "manga",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomKind {
    Anime,
    Manga,
    Characters,
    People,
    Users,
}

impl RandomKind {
    fn as_str(self) -> &'static str {
        match self {
            RandomKind::Anime => "anime",
            RandomKind::Manga => "manga",
            RandomKind::Characters => "characters",
            RandomKind::People => "people",
            RandomKind::Users => "users",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    fn as_str(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
        }
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Search parameters shared by characters, people, producers and magazines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicSearch {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
    pub letter: Option<String>,
}

impl ToParams for BasicSearch {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("q", self.q.as_deref())
            .insert_opt("order_by", self.order_by.as_deref())
            .insert_opt("sort", self.sort.as_deref())
            .insert_opt("letter", self.letter.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimeSearch {
    pub unapproved: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<String>,
    pub rating: Option<String>,
    pub sfw: bool,
    pub genres: Option<String>,
    pub genres_exclude: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
    pub letter: Option<String>,
    pub producers: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ToParams for AnimeSearch {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .flag("unapproved", self.unapproved)
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("q", self.q.as_deref())
            .insert_opt("type", self.kind.as_deref())
            .insert_opt("score", self.score)
            .insert_opt("min_score", self.min_score)
            .insert_opt("max_score", self.max_score)
            .insert_opt("status", self.status.as_deref())
            .insert_opt("rating", self.rating.as_deref())
            .flag("sfw", self.sfw)
            .insert_opt("genres", self.genres.as_deref())
            .insert_opt("genres_exclude", self.genres_exclude.as_deref())
            .insert_opt("order_by", self.order_by.as_deref())
            .insert_opt("sort", self.sort.as_deref())
            .insert_opt("letter", self.letter.as_deref())
            .insert_opt("producers", self.producers.as_deref())
            .insert_opt("start_date", self.start_date.as_deref())
            .insert_opt("end_date", self.end_date.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MangaSearch {
    pub unapproved: bool,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub status: Option<String>,
    pub sfw: bool,
    pub genres: Option<String>,
    pub genres_exclude: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
    pub letter: Option<String>,
    pub magazines: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl ToParams for MangaSearch {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .flag("unapproved", self.unapproved)
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("q", self.q.as_deref())
            .insert_opt("type", self.kind.as_deref())
            .insert_opt("score", self.score)
            .insert_opt("min_score", self.min_score)
            .insert_opt("max_score", self.max_score)
            .insert_opt("status", self.status.as_deref())
            .flag("sfw", self.sfw)
            .insert_opt("genres", self.genres.as_deref())
            .insert_opt("genres_exclude", self.genres_exclude.as_deref())
            .insert_opt("order_by", self.order_by.as_deref())
            .insert_opt("sort", self.sort.as_deref())
            .insert_opt("letter", self.letter.as_deref())
            .insert_opt("magazines", self.magazines.as_deref())
            .insert_opt("start_date", self.start_date.as_deref())
            .insert_opt("end_date", self.end_date.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClubSearch {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub order_by: Option<String>,
    pub sort: Option<String>,
    pub letter: Option<String>,
}

impl ToParams for ClubSearch {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("q", self.q.as_deref())
            .insert_opt("type", self.kind.as_deref())
            .insert_opt("category", self.category.as_deref())
            .insert_opt("order_by", self.order_by.as_deref())
            .insert_opt("sort", self.sort.as_deref())
            .insert_opt("letter", self.letter.as_deref());
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenreQuery {
    pub filter: Option<String>,
}

impl ToParams for GenreQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert_opt("filter", self.filter.as_deref());
        params
    }
}

/// Parameters of the recent-reviews feeds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewQuery {
    pub page: Option<u32>,
    pub preliminary: Option<bool>,
    pub spoilers: Option<bool>,
}

impl ToParams for ReviewQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("preliminary", self.preliminary)
            .insert_opt("spoilers", self.spoilers);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub kids: Option<bool>,
    pub sfw: bool,
    pub unapproved: bool,
}

impl ToParams for ScheduleQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("filter", self.filter.as_deref())
            .insert_opt("kids", self.kids)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSearch {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub q: Option<String>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub max_age: Option<u32>,
    pub min_age: Option<u32>,
}

impl ToParams for UserSearch {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("q", self.q.as_deref())
            .insert_opt("gender", self.gender.as_deref())
            .insert_opt("location", self.location.as_deref())
            .insert_opt("maxAge", self.max_age)
            .insert_opt("minAge", self.min_age);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub filter: Option<String>,
    pub continuing: bool,
    pub sfw: bool,
    pub unapproved: bool,
}

impl ToParams for SeasonQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("filter", self.filter.as_deref())
            .flag("continuing", self.continuing)
            .flag("sfw", self.sfw)
            .flag("unapproved", self.unapproved);
        params
    }
}

/// Parameters of the top anime and top manga rankings. `rating` and `sfw`
/// only apply to anime.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub filter: Option<String>,
    pub rating: Option<String>,
    pub sfw: bool,
}

impl ToParams for TopQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("type", self.kind.as_deref())
            .insert_opt("filter", self.filter.as_deref())
            .insert_opt("rating", self.rating.as_deref())
            .flag("sfw", self.sfw);
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopReviewsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub preliminary: Option<bool>,
    pub spoilers: Option<bool>,
}

impl ToParams for TopReviewsQuery {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params
            .insert_opt("page", self.page)
            .insert_opt("limit", self.limit)
            .insert_opt("type", self.kind.as_deref())
            .insert_opt("preliminary", self.preliminary)
            .insert_opt("spoilers", self.spoilers);
        params
    }
}

/// A bare `page` parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub page: Option<u32>,
}

impl ToParams for Page {
    fn to_params(&self) -> ParameterSet {
        let mut params = ParameterSet::new();
        params.insert_opt("page", self.page);
        params
    }
}

// ---------------------------------------------------------------------------
// Endpoints
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum Endpoint {
    Anime(u32, AnimeResource),
    AnimeEpisode(u32, u32),
    AnimeSearch(AnimeSearch),
    Manga(u32, MangaResource),
    MangaSearch(MangaSearch),
    Character(u32, CharacterResource),
    CharacterSearch(BasicSearch),
    Person(u32, PersonResource),
    PeopleSearch(BasicSearch),
    Club(u32, ClubResource),
    ClubSearch(ClubSearch),
    Producer(u32, ProducerResource),
    ProducerSearch(BasicSearch),
    Magazines(BasicSearch),
    Genres(MediaKind, GenreQuery),
    Random(RandomKind),
    Recommendations(MediaKind, Page),
    Reviews(MediaKind, ReviewQuery),
    Schedules(ScheduleQuery),
    UserById(u32),
    /// The username is percent-encoded as one path segment. An empty name is
    /// not rejected; it renders as an empty segment (`/users//animelist`) and
    /// the server answers with an HTTP error.
    User(String, UserResource),
    UserSearch(UserSearch),
    SeasonNow(SeasonQuery),
    Season(u16, Season, SeasonQuery),
    SeasonUpcoming(SeasonQuery),
    SeasonsList,
    TopAnime(TopQuery),
    TopManga(TopQuery),
    TopPeople(Page),
    TopCharacters(Page),
    TopReviews(TopReviewsQuery),
    WatchRecentPromos(Page),
    WatchPopularPromos,
    WatchRecentEpisodes,
    WatchPopularEpisodes,
}

impl Endpoint {
    /// Path relative to the base URL, including the query suffix.
    pub fn path(&self) -> String {
        match self {
            Endpoint::Anime(id, res) => resource("anime", id, res.segment()),
            Endpoint::AnimeEpisode(id, episode) => format!("/anime/{id}/episodes/{episode}"),
            Endpoint::AnimeSearch(q) => with_query("/anime", q),
            Endpoint::Manga(id, res) => resource("manga", id, res.segment()),
            Endpoint::MangaSearch(q) => with_query("/manga", q),
            Endpoint::Character(id, res) => resource("characters", id, res.segment()),
            Endpoint::CharacterSearch(q) => with_query("/characters", q),
            Endpoint::Person(id, res) => resource("people", id, res.segment()),
            Endpoint::PeopleSearch(q) => with_query("/people", q),
            Endpoint::Club(id, res) => resource("clubs", id, res.segment()),
            Endpoint::ClubSearch(q) => with_query("/clubs", q),
            Endpoint::Producer(id, res) => resource("producers", id, res.segment()),
            Endpoint::ProducerSearch(q) => with_query("/producers", q),
            Endpoint::Magazines(q) => with_query("/magazines", q),
            Endpoint::Genres(kind, q) => with_query(&format!("/genres/{}", kind.as_str()), q),
            Endpoint::Random(kind) => format!("/random/{}", kind.as_str()),
            Endpoint::Recommendations(kind, q) => {
                with_query(&format!("/recommendations/{}", kind.as_str()), q)
            }
            Endpoint::Reviews(kind, q) => with_query(&format!("/reviews/{}", kind.as_str()), q),
            Endpoint::Schedules(q) => with_query("/schedules", q),
            Endpoint::UserById(id) => format!("/users/userbyid/{id}"),
            Endpoint::User(username, res) => {
                resource("users", encode_component(username), res.segment())
            }
            Endpoint::UserSearch(q) => with_query("/users", q),
            Endpoint::SeasonNow(q) => with_query("/seasons/now", q),
            Endpoint::Season(year, season, q) => {
                with_query(&format!("/seasons/{year}/{}", season.as_str()), q)
            }
            Endpoint::SeasonUpcoming(q) => with_query("/seasons/upcoming", q),
            Endpoint::SeasonsList => "/seasons".to_string(),
            Endpoint::TopAnime(q) => with_query("/top/anime", q),
            Endpoint::TopManga(q) => with_query("/top/manga", q),
            Endpoint::TopPeople(q) => with_query("/top/people", q),
            Endpoint::TopCharacters(q) => with_query("/top/characters", q),
            Endpoint::TopReviews(q) => with_query("/top/reviews", q),
            Endpoint::WatchRecentPromos(q) => with_query("/watch/promos", q),
            Endpoint::WatchPopularPromos => "/watch/promos/popular".to_string(),
            Endpoint::WatchRecentEpisodes => "/watch/episodes".to_string(),
            Endpoint::WatchPopularEpisodes => "/watch/episodes/popular".to_string(),
        }
    }
}

fn resource(collection: &str, id: impl Display, segment: Option<&str>) -> String {
    match segment {
        Some(segment) => format!("/{collection}/{id}/{segment}"),
        None => format!("/{collection}/{id}"),
    }
}

fn with_query(path: &str, query: &impl ToParams) -> String {
    format!("{path}{}", query.to_params().encode())
}

impl JikanClient {
    /// Issue a GET for `endpoint`.
    pub async fn fetch(&self, endpoint: &Endpoint) -> CallResult {
        self.get(&endpoint.path()).await
    }
}
