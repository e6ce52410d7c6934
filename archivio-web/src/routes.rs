use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/dashboard")]
    Dashboard,
    #[at("/archive")]
    Archive,
    #[at("/background")]
    Background,
    #[at("/admin")]
    Admin,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Routes reachable without a session.
    #[must_use]
    pub const fn is_public(&self) -> bool {
        matches!(self, Self::Landing | Self::Login | Self::Register | Self::NotFound)
    }

    /// Routes restricted to the admin role.
    #[must_use]
    pub const fn is_admin_only(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::Route;

    #[test]
    fn public_and_admin_partitions_are_disjoint() {
        let all = [
            Route::Landing,
            Route::Login,
            Route::Register,
            Route::Dashboard,
            Route::Archive,
            Route::Background,
            Route::Admin,
            Route::NotFound,
        ];
        for route in all {
            assert!(!(route.is_public() && route.is_admin_only()));
        }
        assert!(Route::Admin.is_admin_only());
        assert!(!Route::Dashboard.is_public());
    }
}
