//! Reading and rewriting the `lang` query parameter of a page URL.
//!
//! Only the `lang` pair is ever interpreted. Every other pair, including ones
//! that do not decode, is carried through untouched, and so is the fragment.

use crate::i18n::{Lang, LANG_QUERY_PARAM};

struct Parts<'a> {
    base: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn split(href: &str) -> Parts<'_> {
    let (rest, fragment) = match href.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment)),
        None => (href, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (rest, None),
    };
    Parts {
        base,
        query,
        fragment,
    }
}

fn decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

fn is_lang_pair(pair: &str) -> bool {
    let key = pair.split_once('=').map(|(k, _)| k).unwrap_or(pair);
    decode(key).is_some_and(|k| k == LANG_QUERY_PARAM)
}

/// Language named by the first `lang` pair of `href`, if it is a known code.
pub fn lang_from_href(href: &str) -> Option<Lang> {
    let query = split(href).query?;
    let pair = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .find(|pair| is_lang_pair(pair))?;
    let value = pair.split_once('=').map(|(_, v)| v).unwrap_or("");
    Lang::from_code(&decode(value)?)
}

/// `href` with its `lang` parameter set to `lang`.
///
/// The first `lang` pair is replaced in place and later duplicates are
/// dropped; when there is none, the pair is appended.
pub fn with_lang_param(href: &str, lang: Lang) -> String {
    let parts = split(href);
    let replacement = format!(
        "{}={}",
        urlencoding::encode(LANG_QUERY_PARAM),
        urlencoding::encode(lang.code())
    );

    let mut pairs: Vec<String> = Vec::new();
    let mut replaced = false;
    for pair in parts.query.unwrap_or("").split('&') {
        if pair.is_empty() {
            continue;
        }
        if is_lang_pair(pair) {
            if !replaced {
                pairs.push(replacement.clone());
                replaced = true;
            }
            continue;
        }
        pairs.push(pair.to_string());
    }
    if !replaced {
        pairs.push(replacement);
    }

    let mut out = format!("{}?{}", parts.base, pairs.join("&"));
    if let Some(fragment) = parts.fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
