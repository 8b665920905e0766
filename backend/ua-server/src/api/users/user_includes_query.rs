use ua_core::UserIncludes;

use serde::Deserialize;

/// `?email=true&telephone=true&address=true`; anything but `true` is off.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserIncludesQuery {
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
}

impl From<UserIncludesQuery> for UserIncludes {
    fn from(query: UserIncludesQuery) -> Self {
        let on = |v: Option<String>| v.as_deref() == Some("true");
        UserIncludes {
            email: on(query.email),
            telephone: on(query.telephone),
            address: on(query.address),
        }
    }
}
