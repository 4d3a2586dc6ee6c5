//! URL composition.
//!
//! A URL is built from a base, an ordered list of path segments and a set of
//! query parameters. Parameters replace whatever query the base carried.

use url::Url;

use crate::error::Error;

pub fn parse_base(base: &str) -> Result<Url, Error> {
    Ok(Url::parse(base)?)
}

/// `base` with `path_segments` appended in order and its query replaced by
/// `parameters`.
///
/// ```ignore
/// let base = Url::parse("https://pokeapi.co")?;
/// let url = url_for(&base, &["api/v2", "pokemon"], [("offset", "0"), ("limit", "964")]);
/// assert_eq!(url.as_str(), "https://pokeapi.co/api/v2/pokemon?offset=0&limit=964");
/// ```
pub fn url_for<S, I, K, V>(base: &Url, path_segments: &[S], parameters: I) -> Url
where
    S: AsRef<str>,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    with_query(with_path_segments(base, path_segments), parameters)
}

/// Appends each segment to the path. A segment containing `/` contributes one
/// path component per non-empty piece.
///
/// With nothing to append, and for bases that cannot carry a path (such as
/// `mailto:` URLs), the base comes back unchanged.
pub fn with_path_segments<S: AsRef<str>>(base: &Url, path_segments: &[S]) -> Url {
    let pieces: Vec<&str> = path_segments
        .iter()
        .flat_map(|segment| segment.as_ref().split('/'))
        .filter(|piece| !piece.is_empty())
        .collect();

    let mut url = base.clone();
    if pieces.is_empty() {
        return url;
    }
    match url.path_segments_mut() {
        Ok(mut path) => {
            path.pop_if_empty().extend(pieces);
        }
        Err(()) => log::debug!("{} cannot carry path segments", base),
    }
    url
}

/// Replaces the query of `url` with `parameters`. No parameters means no
/// query at all.
pub fn with_query<I, K, V>(mut url: Url, parameters: I) -> Url
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let parameters: Vec<(K, V)> = parameters.into_iter().collect();

    url.set_query(None);
    if !parameters.is_empty() {
        url.query_pairs_mut().extend_pairs(parameters);
    }
    url
}
