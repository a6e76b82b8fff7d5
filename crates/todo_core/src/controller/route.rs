//! Route fragment parsing and the list filter enumeration.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Which records the list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Title-case route name, e.g. `"Active"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A route name with no matching filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl Display for UnknownRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown route `{}`; expected All|Active|Completed",
            self.0
        )
    }
}

impl Error for UnknownRoute {}

impl FromStr for Filter {
    type Err = UnknownRoute;

    /// Exact, case-sensitive match on the title-case name.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "All" => Ok(Self::All),
            "Active" => Ok(Self::Active),
            "Completed" => Ok(Self::Completed),
            other => Err(UnknownRoute(other.to_string())),
        }
    }
}

/// Extracts the page segment from a fragment such as `#/active`.
///
/// Returns `""` when the fragment has no second `/`-segment.
pub fn page_segment(fragment: &str) -> &str {
    fragment.split('/').nth(1).unwrap_or("")
}

/// Upper-cases the first character and keeps the rest as-is.
pub fn capitalize(route: &str) -> String {
    let mut chars = route.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Decides whether `_filter` re-renders the list.
///
/// Mirrors the long-standing condition
/// `force || last != "All" || last != active`. It only suppresses the render
/// when both the last and the current route are `All` and `force` is unset.
/// A list that was never rendered (`last == None`) always renders.
pub fn should_render(force: bool, last_active_route: Option<&str>, active_route: &str) -> bool {
    let Some(last) = last_active_route else {
        return true;
    };
    force || last != "All" || last != active_route
}

#[cfg(test)]
mod tests {
    use super::{capitalize, page_segment, should_render, Filter, UnknownRoute};

    #[test]
    fn page_segment_takes_second_slash_segment() {
        assert_eq!(page_segment(""), "");
        assert_eq!(page_segment("#/"), "");
        assert_eq!(page_segment("#/active"), "active");
        assert_eq!(page_segment("#/completed/extra"), "completed");
        assert_eq!(page_segment("no-slash"), "");
    }

    #[test]
    fn capitalize_only_touches_first_char() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize("All"), "All");
        assert_eq!(capitalize("cOMPLETED"), "COMPLETED");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn filter_parsing_is_case_sensitive() {
        assert_eq!("Active".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!("Completed".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(
            "ACTIVE".parse::<Filter>(),
            Err(UnknownRoute("ACTIVE".to_string()))
        );
        assert!("".parse::<Filter>().is_err());
    }

    // The historical condition reads like a tautology but is not: staying on
    // All without `force` skips the re-render. Pinned here so a change is deliberate.
    #[test]
    fn should_render_skips_only_all_to_all_without_force() {
        assert!(!should_render(false, Some("All"), "All"));
        assert!(should_render(true, Some("All"), "All"));
        assert!(should_render(false, Some("All"), "Active"));
        assert!(should_render(false, Some("Active"), "Active"));
        assert!(should_render(false, Some("Completed"), "All"));
        assert!(should_render(false, None, "All"));
    }
}
