//! Table and column names the engine reads by name.

pub(crate) mod geoheader {
    pub(crate) const TABLE: &str = "geoheader";
    pub(crate) const GEOID: &str = "geoid";
    pub(crate) const NAME: &str = "name";
    pub(crate) const SUMLEVEL: &str = "sumlevel";
}

/// Join keys shared by the header table and every statistical table.
pub(crate) mod keys {
    pub(crate) const STUSAB: &str = "stusab";
    pub(crate) const LOGRECNO: &str = "logrecno";
}

/// B01001: sex by age.
pub(crate) mod b01001 {
    pub(crate) const TABLE: &str = "b01001";
    pub(crate) const TOTAL: &str = "b01001001";
    /// Male: under 5, 5 to 9, 10 to 14, 15 to 17.
    pub(crate) const MALE_UNDER_18: [&str; 4] = ["b01001003", "b01001004", "b01001005", "b01001006"];
    /// Female: under 5, 5 to 9, 10 to 14, 15 to 17.
    pub(crate) const FEMALE_UNDER_18: [&str; 4] =
        ["b01001027", "b01001028", "b01001029", "b01001030"];
}
