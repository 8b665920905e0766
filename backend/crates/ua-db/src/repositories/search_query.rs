use ua_core::UserSummary;

/// Columns the listing can be ordered by, addressed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Name,
    Nickname,
    Cpf,
    BirthDate,
    UpdatedAt,
    MainEmail,
    MainTelephone,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        Self::Id,
        Self::Name,
        Self::Nickname,
        Self::Cpf,
        Self::BirthDate,
        Self::UpdatedAt,
        Self::MainEmail,
        Self::MainTelephone,
    ];

    /// Name used in query strings and row JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Nickname => "nickname",
            Self::Cpf => "cpf",
            Self::BirthDate => "birth_date",
            Self::UpdatedAt => "updated_at",
            Self::MainEmail => "mainEmail",
            Self::MainTelephone => "mainTelephone",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// SQL expression in the search query; never built from user input.
    pub(crate) fn column(&self) -> &'static str {
        match self {
            Self::Id => "u.id",
            Self::Name => "u.name COLLATE NOCASE",
            Self::Nickname => "u.nickname COLLATE NOCASE",
            Self::Cpf => "u.cpf",
            Self::BirthDate => "u.birth_date",
            Self::UpdatedAt => "u.updated_at",
            Self::MainEmail => "main_email COLLATE NOCASE",
            Self::MainTelephone => "main_telephone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Anything other than `desc` (any case) is ascending.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub(crate) fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// One page of the user listing.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub offset: i64,
    pub limit: i64,
    pub sort: SortField,
    pub order: SortOrder,
    pub secondary: Option<(SortField, SortOrder)>,
    /// Rows are ordered by this field first so groups stay contiguous
    pub group: Option<SortField>,
    /// Matched against name, nickname, CPF and every e-mail
    pub search: Option<String>,
    pub include_main_address: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: 10,
            sort: SortField::Id,
            order: SortOrder::Asc,
            secondary: None,
            group: None,
            search: None,
            include_main_address: false,
        }
    }
}

impl SearchQuery {
    pub(crate) fn order_by(&self) -> String {
        let mut terms = Vec::new();
        if let Some(group) = self.group {
            terms.push(format!("{} ASC", group.column()));
        }
        terms.push(format!("{} {}", self.sort.column(), self.order.sql()));
        if let Some((field, order)) = self.secondary {
            terms.push(format!("{} {}", field.column(), order.sql()));
        }
        if self.sort != SortField::Id {
            terms.push(String::from("u.id ASC"));
        }
        terms.join(", ")
    }

    /// `LIKE` pattern matching the term literally, escaped with `\`.
    pub(crate) fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)))
    }
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub rows: Vec<UserSummary>,
    pub total_count: i64,
}
