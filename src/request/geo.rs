//! Geo targeting tables.
//!
//! Country and region identifiers accepted by the proxy network. The set is
//! provider-defined, not the full ISO 3166 list.

use std::fmt;

/// Countries the proxy network can exit from, carried on the wire as
/// two-letter lowercase codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeoCode {
    Afghanistan,
    Albania,
    Andorra,
    Angola,
    Argentina,
    Armenia,
    Aruba,
    Australia,
    Austria,
    Azerbaijan,
    Bahamas,
    Bangladesh,
    Belarus,
    Belgium,
    Belize,
    Benin,
    Bhutan,
    Bolivia,
    BosniaHerzegovina,
    Brazil,
    BritishVirginIslands,
    Bulgaria,
    Cambodia,
    Cameroon,
    Canada,
    CentralAfricanRepublic,
    Chad,
    Chile,
    China,
    Colombia,
    CostaRica,
    CoteDIvoire,
    Croatia,
    Cuba,
    Cyprus,
    CzechRepublic,
    Denmark,
    Djibouti,
    Dominica,
    Ecuador,
    Egypt,
    Estonia,
    Ethiopia,
    Fiji,
    Finland,
    France,
    Gambia,
    GreatBritain,
    Georgia,
    Germany,
    Ghana,
    Greece,
    Haiti,
    Honduras,
    HongKong,
    Hungary,
    Iceland,
    Israel,
    India,
    Indonesia,
    Iran,
    Iraq,
    Ireland,
    Italy,
    Jamaica,
    Japan,
    Jordan,
    Kazakhstan,
    Kenya,
    Lebanon,
    Liberia,
    Liechtenstein,
    Lithuania,
    Latvia,
    Luxembourg,
    Macedonia,
    Madagascar,
    Malaysia,
    Maldives,
    Mali,
    Malta,
    Mauritania,
    Mauritius,
    Mexico,
    Moldova,
    Monaco,
    Mongolia,
    Montenegro,
    Morocco,
    Mozambique,
    Myanmar,
    Netherlands,
    NewZealand,
    Nigeria,
    Norway,
    Oman,
    Pakistan,
    Panama,
    Paraguay,
    Peru,
    Philippines,
    Portugal,
    Poland,
    PuertoRico,
    Qatar,
    Romania,
    SaudiArabia,
    Senegal,
    Serbia,
    Seychelles,
    Singapore,
    Slovakia,
    Slovenia,
    SouthAfrica,
    SouthKorea,
    SouthSudan,
    Spain,
    Sudan,
    Sweden,
    Switzerland,
    Taiwan,
    Thailand,
    Tunisia,
    Togo,
    Turkey,
    Turkmenistan,
    UnitedArabEmirates,
    Uganda,
    Ukraine,
    Uruguay,
    UnitedStates,
    Uzbekistan,
    Venezuela,
    Vietnam,
    Yemen,
    Zambia,
    Zimbabwe,
}

impl GeoCode {
    /// Wire form of the country code.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeoCode::Afghanistan => "af",
            GeoCode::Albania => "al",
            GeoCode::Andorra => "ad",
            GeoCode::Angola => "ao",
            GeoCode::Argentina => "ar",
            GeoCode::Armenia => "am",
            GeoCode::Aruba => "aw",
            GeoCode::Australia => "au",
            GeoCode::Austria => "at",
            GeoCode::Azerbaijan => "az",
            GeoCode::Bahamas => "bs",
            GeoCode::Bangladesh => "bd",
            GeoCode::Belarus => "by",
            GeoCode::Belgium => "be",
            GeoCode::Belize => "bz",
            GeoCode::Benin => "bj",
            GeoCode::Bhutan => "bt",
            GeoCode::Bolivia => "bo",
            GeoCode::BosniaHerzegovina => "ba",
            GeoCode::Brazil => "br",
            GeoCode::BritishVirginIslands => "vg",
            GeoCode::Bulgaria => "bg",
            GeoCode::Cambodia => "kh",
            GeoCode::Cameroon => "cm",
            GeoCode::Canada => "ca",
            GeoCode::CentralAfricanRepublic => "cf",
            GeoCode::Chad => "td",
            GeoCode::Chile => "cl",
            GeoCode::China => "cn",
            GeoCode::Colombia => "co",
            GeoCode::CostaRica => "cr",
            GeoCode::CoteDIvoire => "ci",
            GeoCode::Croatia => "hr",
            GeoCode::Cuba => "cu",
            GeoCode::Cyprus => "cy",
            GeoCode::CzechRepublic => "cz",
            GeoCode::Denmark => "dk",
            GeoCode::Djibouti => "dj",
            GeoCode::Dominica => "dm",
            GeoCode::Ecuador => "ec",
            GeoCode::Egypt => "eg",
            GeoCode::Estonia => "ee",
            GeoCode::Ethiopia => "et",
            GeoCode::Fiji => "fj",
            GeoCode::Finland => "fi",
            GeoCode::France => "fr",
            GeoCode::Gambia => "gm",
            GeoCode::GreatBritain => "gb",
            GeoCode::Georgia => "ge",
            GeoCode::Germany => "de",
            GeoCode::Ghana => "gh",
            GeoCode::Greece => "gr",
            GeoCode::Haiti => "ht",
            GeoCode::Honduras => "hn",
            GeoCode::HongKong => "hk",
            GeoCode::Hungary => "hu",
            GeoCode::Iceland => "is",
            GeoCode::Israel => "il",
            GeoCode::India => "in",
            GeoCode::Indonesia => "id",
            GeoCode::Iran => "ir",
            GeoCode::Iraq => "iq",
            GeoCode::Ireland => "ie",
            GeoCode::Italy => "it",
            GeoCode::Jamaica => "jm",
            GeoCode::Japan => "jp",
            GeoCode::Jordan => "jo",
            GeoCode::Kazakhstan => "kz",
            GeoCode::Kenya => "ke",
            GeoCode::Lebanon => "lb",
            GeoCode::Liberia => "lr",
            GeoCode::Liechtenstein => "li",
            GeoCode::Lithuania => "lt",
            GeoCode::Latvia => "lv",
            GeoCode::Luxembourg => "lu",
            GeoCode::Macedonia => "mk",
            GeoCode::Madagascar => "mg",
            GeoCode::Malaysia => "my",
            GeoCode::Maldives => "mv",
            GeoCode::Mali => "ml",
            GeoCode::Malta => "mt",
            GeoCode::Mauritania => "mr",
            GeoCode::Mauritius => "mu",
            GeoCode::Mexico => "mx",
            GeoCode::Moldova => "md",
            GeoCode::Monaco => "mc",
            GeoCode::Mongolia => "mn",
            GeoCode::Montenegro => "me",
            GeoCode::Morocco => "ma",
            GeoCode::Mozambique => "mz",
            GeoCode::Myanmar => "mm",
            GeoCode::Netherlands => "nl",
            GeoCode::NewZealand => "nz",
            GeoCode::Nigeria => "ng",
            GeoCode::Norway => "no",
            GeoCode::Oman => "om",
            GeoCode::Pakistan => "pk",
            GeoCode::Panama => "pa",
            GeoCode::Paraguay => "py",
            GeoCode::Peru => "pe",
            GeoCode::Philippines => "ph",
            GeoCode::Portugal => "pt",
            GeoCode::Poland => "pl",
            GeoCode::PuertoRico => "pr",
            GeoCode::Qatar => "qa",
            GeoCode::Romania => "ro",
            GeoCode::SaudiArabia => "sa",
            GeoCode::Senegal => "sn",
            GeoCode::Serbia => "rs",
            GeoCode::Seychelles => "sc",
            GeoCode::Singapore => "sg",
            GeoCode::Slovakia => "sk",
            GeoCode::Slovenia => "si",
            GeoCode::SouthAfrica => "za",
            GeoCode::SouthKorea => "kr",
            GeoCode::SouthSudan => "ss",
            GeoCode::Spain => "es",
            GeoCode::Sudan => "sd",
            GeoCode::Sweden => "se",
            GeoCode::Switzerland => "ch",
            GeoCode::Taiwan => "tw",
            GeoCode::Thailand => "th",
            GeoCode::Tunisia => "tn",
            GeoCode::Togo => "tg",
            GeoCode::Turkey => "tr",
            GeoCode::Turkmenistan => "tm",
            GeoCode::UnitedArabEmirates => "ae",
            GeoCode::Uganda => "ug",
            GeoCode::Ukraine => "ua",
            GeoCode::Uruguay => "uy",
            GeoCode::UnitedStates => "us",
            GeoCode::Uzbekistan => "uz",
            GeoCode::Venezuela => "ve",
            GeoCode::Vietnam => "vn",
            GeoCode::Yemen => "ye",
            GeoCode::Zambia => "zm",
            GeoCode::Zimbabwe => "zw",
        }
    }
}

impl fmt::Display for GeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Continent-level exit regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionalGeoCode {
    Europe,
    Asia,
    Africa,
    Oceania,
    NorthAmerica,
    SouthAmerica,
}

impl RegionalGeoCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionalGeoCode::Europe => "europe",
            RegionalGeoCode::Asia => "asia",
            RegionalGeoCode::Africa => "africa",
            RegionalGeoCode::Oceania => "oceania",
            RegionalGeoCode::NorthAmerica => "northamerica",
            RegionalGeoCode::SouthAmerica => "southamerica",
        }
    }
}

impl fmt::Display for RegionalGeoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
