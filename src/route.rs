//! See [`Route`].

/// Where a request should be sent, decided solely by its URI path.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Route {
    /// Forward the request to the remote mirror. Holds the path of the resource relative to the
    /// mirror's origin.
    Mirror(&'static str),

    /// Delegate the request to the static-asset binding.
    Assets,
}

impl Route {
    /// Resolves the route for a URI path.
    ///
    /// Only exact, case-sensitive matches are mirrored. Everything else, including subpaths like
    /// `/article/sub`, goes to the static assets.
    pub fn resolve(path: &str) -> Self {
        match path {
            "/matt-shumer.html" | "/matt-shumer" => Self::Mirror("matt-shumer.html"),
            "/article/" | "/article" => Self::Mirror("article/index.html"),
            _ => Self::Assets,
        }
    }
}
