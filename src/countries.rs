//! Country name normalization to ISO 3166-1 alpha-2 codes.
//!
//! Accepts official short names, alpha-2 and alpha-3 codes, and a handful
//! of common aliases. Matching ignores case, surrounding whitespace, dots
//! and a leading "the".

struct Country {
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
}

const fn c(
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
) -> Country {
    Country {
        alpha2,
        alpha3,
        name,
        aliases,
    }
}

#[rustfmt::skip]
const COUNTRIES: &[Country] = &[
    c("AD", "AND", "andorra", &[]),
    c("AE", "ARE", "united arab emirates", &["uae", "emirates"]),
    c("AF", "AFG", "afghanistan", &[]),
    c("AG", "ATG", "antigua and barbuda", &["antigua"]),
    c("AI", "AIA", "anguilla", &[]),
    c("AL", "ALB", "albania", &[]),
    c("AM", "ARM", "armenia", &[]),
    c("AO", "AGO", "angola", &[]),
    c("AQ", "ATA", "antarctica", &[]),
    c("AR", "ARG", "argentina", &[]),
    c("AS", "ASM", "american samoa", &[]),
    c("AT", "AUT", "austria", &[]),
    c("AU", "AUS", "australia", &[]),
    c("AW", "ABW", "aruba", &[]),
    c("AX", "ALA", "aland islands", &["åland islands", "aland"]),
    c("AZ", "AZE", "azerbaijan", &[]),
    c("BA", "BIH", "bosnia and herzegovina", &["bosnia", "bosnia & herzegovina"]),
    c("BB", "BRB", "barbados", &[]),
    c("BD", "BGD", "bangladesh", &[]),
    c("BE", "BEL", "belgium", &[]),
    c("BF", "BFA", "burkina faso", &[]),
    c("BG", "BGR", "bulgaria", &[]),
    c("BH", "BHR", "bahrain", &[]),
    c("BI", "BDI", "burundi", &[]),
    c("BJ", "BEN", "benin", &[]),
    c("BL", "BLM", "saint barthelemy", &["saint barthélemy", "st barthelemy"]),
    c("BM", "BMU", "bermuda", &[]),
    c("BN", "BRN", "brunei", &["brunei darussalam"]),
    c("BO", "BOL", "bolivia", &["plurinational state of bolivia"]),
    c("BQ", "BES", "bonaire, sint eustatius and saba", &["caribbean netherlands", "bonaire"]),
    c("BR", "BRA", "brazil", &["brasil"]),
    c("BS", "BHS", "bahamas", &[]),
    c("BT", "BTN", "bhutan", &[]),
    c("BV", "BVT", "bouvet island", &[]),
    c("BW", "BWA", "botswana", &[]),
    c("BY", "BLR", "belarus", &[]),
    c("BZ", "BLZ", "belize", &[]),
    c("CA", "CAN", "canada", &[]),
    c("CC", "CCK", "cocos (keeling) islands", &["cocos islands"]),
    c("CD", "COD", "democratic republic of the congo", &["dr congo", "drc", "congo-kinshasa", "congo, democratic republic of the"]),
    c("CF", "CAF", "central african republic", &["car"]),
    c("CG", "COG", "republic of the congo", &["congo", "congo-brazzaville", "congo republic"]),
    c("CH", "CHE", "switzerland", &[]),
    c("CI", "CIV", "cote d'ivoire", &["côte d'ivoire", "ivory coast"]),
    c("CK", "COK", "cook islands", &[]),
    c("CL", "CHL", "chile", &[]),
    c("CM", "CMR", "cameroon", &[]),
    c("CN", "CHN", "china", &["people's republic of china", "prc"]),
    c("CO", "COL", "colombia", &[]),
    c("CR", "CRI", "costa rica", &[]),
    c("CU", "CUB", "cuba", &[]),
    c("CV", "CPV", "cabo verde", &["cape verde"]),
    c("CW", "CUW", "curacao", &["curaçao"]),
    c("CX", "CXR", "christmas island", &[]),
    c("CY", "CYP", "cyprus", &[]),
    c("CZ", "CZE", "czechia", &["czech republic"]),
    c("DE", "DEU", "germany", &["deutschland"]),
    c("DJ", "DJI", "djibouti", &[]),
    c("DK", "DNK", "denmark", &[]),
    c("DM", "DMA", "dominica", &[]),
    c("DO", "DOM", "dominican republic", &[]),
    c("DZ", "DZA", "algeria", &[]),
    c("EC", "ECU", "ecuador", &[]),
    c("EE", "EST", "estonia", &[]),
    c("EG", "EGY", "egypt", &[]),
    c("EH", "ESH", "western sahara", &[]),
    c("ER", "ERI", "eritrea", &[]),
    c("ES", "ESP", "spain", &["españa", "espana"]),
    c("ET", "ETH", "ethiopia", &[]),
    c("FI", "FIN", "finland", &[]),
    c("FJ", "FJI", "fiji", &[]),
    c("FK", "FLK", "falkland islands", &["falklands", "malvinas"]),
    c("FM", "FSM", "micronesia", &["federated states of micronesia"]),
    c("FO", "FRO", "faroe islands", &["faroes"]),
    c("FR", "FRA", "france", &[]),
    c("GA", "GAB", "gabon", &[]),
    c("GB", "GBR", "united kingdom", &["uk", "great britain", "britain", "england", "scotland", "wales", "northern ireland"]),
    c("GD", "GRD", "grenada", &[]),
    c("GE", "GEO", "georgia", &[]),
    c("GF", "GUF", "french guiana", &[]),
    c("GG", "GGY", "guernsey", &[]),
    c("GH", "GHA", "ghana", &[]),
    c("GI", "GIB", "gibraltar", &[]),
    c("GL", "GRL", "greenland", &[]),
    c("GM", "GMB", "gambia", &[]),
    c("GN", "GIN", "guinea", &[]),
    c("GP", "GLP", "guadeloupe", &[]),
    c("GQ", "GNQ", "equatorial guinea", &[]),
    c("GR", "GRC", "greece", &["hellas"]),
    c("GS", "SGS", "south georgia and the south sandwich islands", &["south georgia"]),
    c("GT", "GTM", "guatemala", &[]),
    c("GU", "GUM", "guam", &[]),
    c("GW", "GNB", "guinea-bissau", &["guinea bissau"]),
    c("GY", "GUY", "guyana", &[]),
    c("HK", "HKG", "hong kong", &[]),
    c("HM", "HMD", "heard island and mcdonald islands", &[]),
    c("HN", "HND", "honduras", &[]),
    c("HR", "HRV", "croatia", &["hrvatska"]),
    c("HT", "HTI", "haiti", &[]),
    c("HU", "HUN", "hungary", &[]),
    c("ID", "IDN", "indonesia", &[]),
    c("IE", "IRL", "ireland", &["eire", "republic of ireland"]),
    c("IL", "ISR", "israel", &[]),
    c("IM", "IMN", "isle of man", &[]),
    c("IN", "IND", "india", &[]),
    c("IO", "IOT", "british indian ocean territory", &[]),
    c("IQ", "IRQ", "iraq", &[]),
    c("IR", "IRN", "iran", &["islamic republic of iran"]),
    c("IS", "ISL", "iceland", &[]),
    c("IT", "ITA", "italy", &["italia"]),
    c("JE", "JEY", "jersey", &[]),
    c("JM", "JAM", "jamaica", &[]),
    c("JO", "JOR", "jordan", &[]),
    c("JP", "JPN", "japan", &["nippon"]),
    c("KE", "KEN", "kenya", &[]),
    c("KG", "KGZ", "kyrgyzstan", &["kyrgyz republic"]),
    c("KH", "KHM", "cambodia", &[]),
    c("KI", "KIR", "kiribati", &[]),
    c("KM", "COM", "comoros", &[]),
    c("KN", "KNA", "saint kitts and nevis", &["st kitts and nevis"]),
    c("KP", "PRK", "north korea", &["democratic people's republic of korea", "dprk"]),
    c("KR", "KOR", "south korea", &["korea", "republic of korea"]),
    c("KW", "KWT", "kuwait", &[]),
    c("KY", "CYM", "cayman islands", &[]),
    c("KZ", "KAZ", "kazakhstan", &[]),
    c("LA", "LAO", "laos", &["lao people's democratic republic", "lao pdr"]),
    c("LB", "LBN", "lebanon", &[]),
    c("LC", "LCA", "saint lucia", &["st lucia"]),
    c("LI", "LIE", "liechtenstein", &[]),
    c("LK", "LKA", "sri lanka", &[]),
    c("LR", "LBR", "liberia", &[]),
    c("LS", "LSO", "lesotho", &[]),
    c("LT", "LTU", "lithuania", &[]),
    c("LU", "LUX", "luxembourg", &[]),
    c("LV", "LVA", "latvia", &[]),
    c("LY", "LBY", "libya", &[]),
    c("MA", "MAR", "morocco", &[]),
    c("MC", "MCO", "monaco", &[]),
    c("MD", "MDA", "moldova", &["republic of moldova"]),
    c("ME", "MNE", "montenegro", &[]),
    c("MF", "MAF", "saint martin", &["st martin"]),
    c("MG", "MDG", "madagascar", &[]),
    c("MH", "MHL", "marshall islands", &[]),
    c("MK", "MKD", "north macedonia", &["macedonia"]),
    c("ML", "MLI", "mali", &[]),
    c("MM", "MMR", "myanmar", &["burma"]),
    c("MN", "MNG", "mongolia", &[]),
    c("MO", "MAC", "macao", &["macau"]),
    c("MP", "MNP", "northern mariana islands", &[]),
    c("MQ", "MTQ", "martinique", &[]),
    c("MR", "MRT", "mauritania", &[]),
    c("MS", "MSR", "montserrat", &[]),
    c("MT", "MLT", "malta", &[]),
    c("MU", "MUS", "mauritius", &[]),
    c("MV", "MDV", "maldives", &[]),
    c("MW", "MWI", "malawi", &[]),
    c("MX", "MEX", "mexico", &["méxico"]),
    c("MY", "MYS", "malaysia", &[]),
    c("MZ", "MOZ", "mozambique", &[]),
    c("NA", "NAM", "namibia", &[]),
    c("NC", "NCL", "new caledonia", &[]),
    c("NE", "NER", "niger", &[]),
    c("NF", "NFK", "norfolk island", &[]),
    c("NG", "NGA", "nigeria", &[]),
    c("NI", "NIC", "nicaragua", &[]),
    c("NL", "NLD", "netherlands", &["holland", "nederland"]),
    c("NO", "NOR", "norway", &[]),
    c("NP", "NPL", "nepal", &[]),
    c("NR", "NRU", "nauru", &[]),
    c("NU", "NIU", "niue", &[]),
    c("NZ", "NZL", "new zealand", &["aotearoa"]),
    c("OM", "OMN", "oman", &[]),
    c("PA", "PAN", "panama", &[]),
    c("PE", "PER", "peru", &[]),
    c("PF", "PYF", "french polynesia", &[]),
    c("PG", "PNG", "papua new guinea", &[]),
    c("PH", "PHL", "philippines", &[]),
    c("PK", "PAK", "pakistan", &[]),
    c("PL", "POL", "poland", &["polska"]),
    c("PM", "SPM", "saint pierre and miquelon", &[]),
    c("PN", "PCN", "pitcairn", &["pitcairn islands"]),
    c("PR", "PRI", "puerto rico", &[]),
    c("PS", "PSE", "palestine", &["state of palestine", "palestinian territories"]),
    c("PT", "PRT", "portugal", &[]),
    c("PW", "PLW", "palau", &[]),
    c("PY", "PRY", "paraguay", &[]),
    c("QA", "QAT", "qatar", &[]),
    c("RE", "REU", "reunion", &["réunion"]),
    c("RO", "ROU", "romania", &[]),
    c("RS", "SRB", "serbia", &[]),
    c("RU", "RUS", "russia", &["russian federation"]),
    c("RW", "RWA", "rwanda", &[]),
    c("SA", "SAU", "saudi arabia", &[]),
    c("SB", "SLB", "solomon islands", &[]),
    c("SC", "SYC", "seychelles", &[]),
    c("SD", "SDN", "sudan", &[]),
    c("SE", "SWE", "sweden", &["sverige"]),
    c("SG", "SGP", "singapore", &[]),
    c("SH", "SHN", "saint helena", &["st helena"]),
    c("SI", "SVN", "slovenia", &[]),
    c("SJ", "SJM", "svalbard and jan mayen", &["svalbard"]),
    c("SK", "SVK", "slovakia", &["slovak republic"]),
    c("SL", "SLE", "sierra leone", &[]),
    c("SM", "SMR", "san marino", &[]),
    c("SN", "SEN", "senegal", &[]),
    c("SO", "SOM", "somalia", &[]),
    c("SR", "SUR", "suriname", &["surinam"]),
    c("SS", "SSD", "south sudan", &[]),
    c("ST", "STP", "sao tome and principe", &["são tomé and príncipe"]),
    c("SV", "SLV", "el salvador", &[]),
    c("SX", "SXM", "sint maarten", &[]),
    c("SY", "SYR", "syria", &["syrian arab republic"]),
    c("SZ", "SWZ", "eswatini", &["swaziland"]),
    c("TC", "TCA", "turks and caicos islands", &[]),
    c("TD", "TCD", "chad", &[]),
    c("TF", "ATF", "french southern territories", &[]),
    c("TG", "TGO", "togo", &[]),
    c("TH", "THA", "thailand", &[]),
    c("TJ", "TJK", "tajikistan", &[]),
    c("TK", "TKL", "tokelau", &[]),
    c("TL", "TLS", "timor-leste", &["east timor"]),
    c("TM", "TKM", "turkmenistan", &[]),
    c("TN", "TUN", "tunisia", &[]),
    c("TO", "TON", "tonga", &[]),
    c("TR", "TUR", "turkey", &["türkiye", "turkiye"]),
    c("TT", "TTO", "trinidad and tobago", &["trinidad"]),
    c("TV", "TUV", "tuvalu", &[]),
    c("TW", "TWN", "taiwan", &["republic of china"]),
    c("TZ", "TZA", "tanzania", &["united republic of tanzania"]),
    c("UA", "UKR", "ukraine", &[]),
    c("UG", "UGA", "uganda", &[]),
    c("UM", "UMI", "united states minor outlying islands", &[]),
    c("US", "USA", "united states", &["united states of america", "america", "us", "usa"]),
    c("UY", "URY", "uruguay", &[]),
    c("UZ", "UZB", "uzbekistan", &[]),
    c("VA", "VAT", "holy see", &["vatican", "vatican city"]),
    c("VC", "VCT", "saint vincent and the grenadines", &["st vincent and the grenadines"]),
    c("VE", "VEN", "venezuela", &[]),
    c("VG", "VGB", "british virgin islands", &["virgin islands, british"]),
    c("VI", "VIR", "united states virgin islands", &["us virgin islands", "virgin islands, u.s."]),
    c("VN", "VNM", "vietnam", &["viet nam"]),
    c("VU", "VUT", "vanuatu", &[]),
    c("WF", "WLF", "wallis and futuna", &[]),
    c("WS", "WSM", "samoa", &[]),
    c("XK", "XKX", "kosovo", &[]),
    c("YE", "YEM", "yemen", &[]),
    c("YT", "MYT", "mayotte", &[]),
    c("ZA", "ZAF", "south africa", &[]),
    c("ZM", "ZMB", "zambia", &[]),
    c("ZW", "ZWE", "zimbabwe", &[]),
];

fn normalize(input: &str) -> String {
    let lowered = input.trim().to_lowercase().replace('.', "");
    let collapsed = lowered.split_whitespace().collect::<Vec<_>>().join(" ");
    match collapsed.strip_prefix("the ") {
        Some(rest) => rest.to_string(),
        None => collapsed,
    }
}

/// Returns the ISO 3166-1 alpha-2 code for a country name or code.
pub fn country_code(input: &str) -> Option<&'static str> {
    let key = normalize(input);
    if key.is_empty() {
        return None;
    }

    COUNTRIES
        .iter()
        .find(|country| {
            country.name == key
                || country.alpha2.eq_ignore_ascii_case(&key)
                || country.alpha3.eq_ignore_ascii_case(&key)
                || country.aliases.iter().any(|alias| normalize(alias) == key)
        })
        .map(|country| country.alpha2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_official_names() {
        assert_eq!(country_code("Canada"), Some("CA"));
        assert_eq!(country_code("Germany"), Some("DE"));
        assert_eq!(country_code("South Korea"), Some("KR"));
    }

    #[test]
    fn test_codes() {
        assert_eq!(country_code("ca"), Some("CA"));
        assert_eq!(country_code("DEU"), Some("DE"));
        assert_eq!(country_code("gbr"), Some("GB"));
    }

    #[test]
    fn test_aliases_and_noise() {
        assert_eq!(country_code("  U.S.A. "), Some("US"));
        assert_eq!(country_code("The Netherlands"), Some("NL"));
        assert_eq!(country_code("united   kingdom"), Some("GB"));
        assert_eq!(country_code("UK"), Some("GB"));
        assert_eq!(country_code("Côte d'Ivoire"), Some("CI"));
        assert_eq!(country_code("Congo"), Some("CG"));
    }

    #[test]
    fn test_unknown_country() {
        assert_eq!(country_code("Atlantis"), None);
        assert_eq!(country_code(""), None);
        assert_eq!(country_code("   "), None);
    }

    #[test]
    fn test_codes_are_unique() {
        let mut alpha2: Vec<_> = COUNTRIES.iter().map(|c| c.alpha2).collect();
        alpha2.sort_unstable();
        alpha2.dedup();
        assert_eq!(alpha2.len(), COUNTRIES.len());
    }
}
