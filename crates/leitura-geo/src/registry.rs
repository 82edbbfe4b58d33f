//! Embedded ISO 3166-1 country registry.
//!
//! The registry is compiled-in static data: country names in their common
//! English form paired with alpha-3 codes. Lookup is keyed on the folded
//! form of the name (trimmed, diacritics stripped, uppercased), so it is
//! case- and accent-insensitive. Common names ("Russia", "South Korea")
//! are used instead of official UN names because the resolver's input is
//! human-entered text, not diplomatic records.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use leitura_core::text::fold;

/// One ISO 3166-1 entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    /// Common English name.
    pub name: &'static str,
    /// ISO 3166-1 alpha-3 code.
    pub alpha3: &'static str,
}

macro_rules! countries {
    ($(($name:literal, $alpha3:literal),)+) => {
        pub(crate) const COUNTRIES: &[Country] = &[
            $(Country { name: $name, alpha3: $alpha3 },)+
        ];
    };
}

countries! {
    ("Afghanistan", "AFG"),
    ("Albania", "ALB"),
    ("Algeria", "DZA"),
    ("American Samoa", "ASM"),
    ("Andorra", "AND"),
    ("Angola", "AGO"),
    ("Anguilla", "AIA"),
    ("Antarctica", "ATA"),
    ("Antigua and Barbuda", "ATG"),
    ("Argentina", "ARG"),
    ("Armenia", "ARM"),
    ("Aruba", "ABW"),
    ("Australia", "AUS"),
    ("Austria", "AUT"),
    ("Azerbaijan", "AZE"),
    ("Bahamas", "BHS"),
    ("Bahrain", "BHR"),
    ("Bangladesh", "BGD"),
    ("Barbados", "BRB"),
    ("Belarus", "BLR"),
    ("Belgium", "BEL"),
    ("Belize", "BLZ"),
    ("Benin", "BEN"),
    ("Bermuda", "BMU"),
    ("Bhutan", "BTN"),
    ("Bolivia", "BOL"),
    ("Bosnia and Herzegovina", "BIH"),
    ("Botswana", "BWA"),
    ("Brazil", "BRA"),
    ("British Virgin Islands", "VGB"),
    ("Brunei", "BRN"),
    ("Bulgaria", "BGR"),
    ("Burkina Faso", "BFA"),
    ("Burundi", "BDI"),
    ("Cambodia", "KHM"),
    ("Cameroon", "CMR"),
    ("Canada", "CAN"),
    ("Cape Verde", "CPV"),
    ("Cayman Islands", "CYM"),
    ("Central African Republic", "CAF"),
    ("Chad", "TCD"),
    ("Chile", "CHL"),
    ("China", "CHN"),
    ("Colombia", "COL"),
    ("Comoros", "COM"),
    ("Congo", "COG"),
    ("Cook Islands", "COK"),
    ("Costa Rica", "CRI"),
    ("Croatia", "HRV"),
    ("Cuba", "CUB"),
    ("Curaçao", "CUW"),
    ("Cyprus", "CYP"),
    ("Czechia", "CZE"),
    ("Democratic Republic of the Congo", "COD"),
    ("Denmark", "DNK"),
    ("Djibouti", "DJI"),
    ("Dominica", "DMA"),
    ("Dominican Republic", "DOM"),
    ("Ecuador", "ECU"),
    ("Egypt", "EGY"),
    ("El Salvador", "SLV"),
    ("Equatorial Guinea", "GNQ"),
    ("Eritrea", "ERI"),
    ("Estonia", "EST"),
    ("Eswatini", "SWZ"),
    ("Ethiopia", "ETH"),
    ("Falkland Islands", "FLK"),
    ("Faroe Islands", "FRO"),
    ("Fiji", "FJI"),
    ("Finland", "FIN"),
    ("France", "FRA"),
    ("French Guiana", "GUF"),
    ("French Polynesia", "PYF"),
    ("Gabon", "GAB"),
    ("Gambia", "GMB"),
    ("Georgia", "GEO"),
    ("Germany", "DEU"),
    ("Ghana", "GHA"),
    ("Gibraltar", "GIB"),
    ("Greece", "GRC"),
    ("Greenland", "GRL"),
    ("Grenada", "GRD"),
    ("Guadeloupe", "GLP"),
    ("Guam", "GUM"),
    ("Guatemala", "GTM"),
    ("Guernsey", "GGY"),
    ("Guinea", "GIN"),
    ("Guinea-Bissau", "GNB"),
    ("Guyana", "GUY"),
    ("Haiti", "HTI"),
    ("Honduras", "HND"),
    ("Hong Kong", "HKG"),
    ("Hungary", "HUN"),
    ("Iceland", "ISL"),
    ("India", "IND"),
    ("Indonesia", "IDN"),
    ("Iran", "IRN"),
    ("Iraq", "IRQ"),
    ("Ireland", "IRL"),
    ("Isle of Man", "IMN"),
    ("Israel", "ISR"),
    ("Italy", "ITA"),
    ("Ivory Coast", "CIV"),
    ("Jamaica", "JAM"),
    ("Japan", "JPN"),
    ("Jersey", "JEY"),
    ("Jordan", "JOR"),
    ("Kazakhstan", "KAZ"),
    ("Kenya", "KEN"),
    ("Kiribati", "KIR"),
    ("Kosovo", "XKX"),
    ("Kuwait", "KWT"),
    ("Kyrgyzstan", "KGZ"),
    ("Laos", "LAO"),
    ("Latvia", "LVA"),
    ("Lebanon", "LBN"),
    ("Lesotho", "LSO"),
    ("Liberia", "LBR"),
    ("Libya", "LBY"),
    ("Liechtenstein", "LIE"),
    ("Lithuania", "LTU"),
    ("Luxembourg", "LUX"),
    ("Macao", "MAC"),
    ("Madagascar", "MDG"),
    ("Malawi", "MWI"),
    ("Malaysia", "MYS"),
    ("Maldives", "MDV"),
    ("Mali", "MLI"),
    ("Malta", "MLT"),
    ("Marshall Islands", "MHL"),
    ("Martinique", "MTQ"),
    ("Mauritania", "MRT"),
    ("Mauritius", "MUS"),
    ("Mayotte", "MYT"),
    ("Mexico", "MEX"),
    ("Micronesia", "FSM"),
    ("Moldova", "MDA"),
    ("Monaco", "MCO"),
    ("Mongolia", "MNG"),
    ("Montenegro", "MNE"),
    ("Montserrat", "MSR"),
    ("Morocco", "MAR"),
    ("Mozambique", "MOZ"),
    ("Myanmar", "MMR"),
    ("Namibia", "NAM"),
    ("Nauru", "NRU"),
    ("Nepal", "NPL"),
    ("Netherlands", "NLD"),
    ("New Caledonia", "NCL"),
    ("New Zealand", "NZL"),
    ("Nicaragua", "NIC"),
    ("Niger", "NER"),
    ("Nigeria", "NGA"),
    ("Niue", "NIU"),
    ("Norfolk Island", "NFK"),
    ("North Korea", "PRK"),
    ("North Macedonia", "MKD"),
    ("Northern Mariana Islands", "MNP"),
    ("Norway", "NOR"),
    ("Oman", "OMN"),
    ("Pakistan", "PAK"),
    ("Palau", "PLW"),
    ("Palestine", "PSE"),
    ("Panama", "PAN"),
    ("Papua New Guinea", "PNG"),
    ("Paraguay", "PRY"),
    ("Peru", "PER"),
    ("Philippines", "PHL"),
    ("Pitcairn Islands", "PCN"),
    ("Poland", "POL"),
    ("Portugal", "PRT"),
    ("Puerto Rico", "PRI"),
    ("Qatar", "QAT"),
    ("Romania", "ROU"),
    ("Russia", "RUS"),
    ("Rwanda", "RWA"),
    ("Réunion", "REU"),
    ("Saint Barthélemy", "BLM"),
    ("Saint Helena", "SHN"),
    ("Saint Kitts and Nevis", "KNA"),
    ("Saint Lucia", "LCA"),
    ("Saint Martin", "MAF"),
    ("Saint Pierre and Miquelon", "SPM"),
    ("Saint Vincent and the Grenadines", "VCT"),
    ("Samoa", "WSM"),
    ("San Marino", "SMR"),
    ("Sao Tome and Principe", "STP"),
    ("Saudi Arabia", "SAU"),
    ("Senegal", "SEN"),
    ("Serbia", "SRB"),
    ("Seychelles", "SYC"),
    ("Sierra Leone", "SLE"),
    ("Singapore", "SGP"),
    ("Sint Maarten", "SXM"),
    ("Slovakia", "SVK"),
    ("Slovenia", "SVN"),
    ("Solomon Islands", "SLB"),
    ("Somalia", "SOM"),
    ("South Africa", "ZAF"),
    ("South Korea", "KOR"),
    ("South Sudan", "SSD"),
    ("Spain", "ESP"),
    ("Sri Lanka", "LKA"),
    ("Sudan", "SDN"),
    ("Suriname", "SUR"),
    ("Sweden", "SWE"),
    ("Switzerland", "CHE"),
    ("Syria", "SYR"),
    ("Taiwan", "TWN"),
    ("Tajikistan", "TJK"),
    ("Tanzania", "TZA"),
    ("Thailand", "THA"),
    ("Timor-Leste", "TLS"),
    ("Togo", "TGO"),
    ("Tokelau", "TKL"),
    ("Tonga", "TON"),
    ("Trinidad and Tobago", "TTO"),
    ("Tunisia", "TUN"),
    ("Turkey", "TUR"),
    ("Turkmenistan", "TKM"),
    ("Turks and Caicos Islands", "TCA"),
    ("Tuvalu", "TUV"),
    ("U.S. Virgin Islands", "VIR"),
    ("Uganda", "UGA"),
    ("Ukraine", "UKR"),
    ("United Arab Emirates", "ARE"),
    ("United Kingdom", "GBR"),
    ("United States", "USA"),
    ("Uruguay", "URY"),
    ("Uzbekistan", "UZB"),
    ("Vanuatu", "VUT"),
    ("Vatican City", "VAT"),
    ("Venezuela", "VEN"),
    ("Vietnam", "VNM"),
    ("Wallis and Futuna", "WLF"),
    ("Western Sahara", "ESH"),
    ("Yemen", "YEM"),
    ("Zambia", "ZMB"),
    ("Zimbabwe", "ZWE"),
}

static GLOBAL: Lazy<Registry> = Lazy::new(Registry::new);

/// Fold-keyed index over the embedded country table.
///
/// Immutable after construction, so a `&Registry` is freely shareable
/// across threads.
#[derive(Debug)]
pub struct Registry {
    /// Folded name → table entry.
    by_folded_name: HashMap<String, &'static Country>,
    /// (folded name, entry) pairs in table order, for fuzzy scans.
    folded: Vec<(String, &'static Country)>,
}

impl Registry {
    fn new() -> Self {
        let folded: Vec<(String, &'static Country)> = COUNTRIES
            .iter()
            .map(|country| (fold(country.name), country))
            .collect();

        let by_folded_name = folded
            .iter()
            .map(|(key, country)| (key.clone(), *country))
            .collect();

        Self {
            by_folded_name,
            folded,
        }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Registry {
        Lazy::force(&GLOBAL)
    }

    /// Exact lookup by English name, case- and accent-insensitive.
    pub fn lookup_name(&self, name: &str) -> Option<&'static Country> {
        self.by_folded_name.get(&fold(name)).copied()
    }

    /// All country names, in table order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        COUNTRIES.iter().map(|country| country.name)
    }

    /// All (folded name, entry) pairs, in table order.
    pub(crate) fn folded_names(&self) -> impl Iterator<Item = (&str, &'static Country)> + '_ {
        self.folded.iter().map(|(key, country)| (key.as_str(), *country))
    }

    /// Number of registered countries.
    pub fn len(&self) -> usize {
        COUNTRIES.len()
    }

    /// Whether the registry is empty (never true for the embedded table).
    pub fn is_empty(&self) -> bool {
        COUNTRIES.is_empty()
    }
}
