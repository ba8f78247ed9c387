//! Gazetteers for named-entity classification.
//!
//! All entries are lowercase. Multi-word entries are stored as space-joined
//! strings and matched against the space-joined lowercase span.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Countries, continents, regions and major cities.
pub static PLACES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Continents and regions
    set.extend([
        "africa", "antarctica", "asia", "australia", "europe", "north america",
        "south america", "latin america", "middle east", "scandinavia", "siberia",
        "the caribbean", "caribbean",
    ]);

    // Countries
    set.extend([
        "argentina", "austria", "belgium", "brazil", "canada", "chile", "china", "colombia",
        "cuba", "denmark", "egypt", "england", "finland", "france", "germany", "greece", "india",
        "indonesia", "iran", "iraq", "ireland", "israel", "italy", "japan", "kenya", "korea",
        "mexico", "morocco", "netherlands", "new zealand", "nigeria", "norway", "pakistan",
        "peru", "poland", "portugal", "russia", "scotland", "south africa", "south korea",
        "spain", "sweden", "switzerland", "thailand", "turkey", "ukraine", "united kingdom",
        "united states", "usa", "uk", "vietnam", "wales",
    ]);

    // Cities
    set.extend([
        "amsterdam", "athens", "atlanta", "bangkok", "barcelona", "beijing", "berlin", "boston",
        "brussels", "buenos aires", "cairo", "chicago", "copenhagen", "cupertino", "dallas",
        "delhi", "dublin", "edinburgh", "geneva", "hong kong", "houston", "istanbul",
        "jerusalem", "lisbon", "london", "los angeles", "madrid", "melbourne", "miami", "milan",
        "montreal", "moscow", "mumbai", "munich", "nairobi", "new york", "oslo", "paris",
        "prague", "rio de janeiro", "rome", "san francisco", "seattle", "seoul", "shanghai",
        "singapore", "stockholm", "sydney", "tokyo", "toronto", "vancouver", "vienna", "warsaw",
        "washington", "zurich",
    ]);

    // US states
    set.extend([
        "alaska", "arizona", "california", "colorado", "florida", "georgia", "hawaii",
        "illinois", "massachusetts", "michigan", "nevada", "new jersey", "ohio", "oregon",
        "pennsylvania", "texas", "virginia",
    ]);

    set
});

/// Well-known organizations.
pub static ORGANIZATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    // Companies
    set.extend([
        "adobe", "airbnb", "amazon", "apple", "boeing", "cisco", "facebook", "ford", "github",
        "google", "ibm", "intel", "meta", "microsoft", "mozilla", "netflix", "nike", "nintendo",
        "nvidia", "oracle", "samsung", "siemens", "sony", "spotify", "tesla", "toyota",
        "twitter", "uber", "volkswagen", "walmart", "general motors", "goldman sachs",
        "coca cola", "the new york times", "new york times",
    ]);

    // Institutions and agencies
    set.extend([
        "nasa", "fbi", "cia", "unesco", "unicef", "nato", "united nations",
        "european union", "supreme court", "congress", "parliament", "red cross", "harvard",
        "oxford", "cambridge", "stanford", "mit", "bbc", "cnn", "reuters",
    ]);

    set
});

/// Trailing words that mark a span as an organization ("Acme Corp").
pub static ORGANIZATION_INDICATORS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "inc", "corp", "corporation", "co", "company", "ltd", "llc", "plc", "gmbh", "group",
        "holdings", "bank", "university", "college", "institute", "foundation", "association",
        "agency", "ministry", "department", "council", "committee", "society", "labs",
        "technologies", "systems", "airlines", "motors", "press", "times", "fc",
    ]
    .into_iter()
    .collect()
});

/// Leading words that mark a span as an organization ("University of Chicago").
pub static ORGANIZATION_PREFIXES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["university", "bank", "institute", "department", "ministry", "museum"]
        .into_iter()
        .collect()
});

/// Titles that precede a person's name.
pub static PERSON_TITLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "miss", "dr", "prof", "professor", "sir", "madam", "lady", "lord",
        "president", "senator", "governor", "mayor", "king", "queen", "prince", "princess",
        "pope", "judge", "captain", "general", "minister", "chancellor", "ceo", "rev", "saint",
    ]
    .into_iter()
    .collect()
});

/// Common English given names.
pub static FIRST_NAMES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();

    set.extend([
        "aaron", "adam", "alan", "albert", "alex", "alexander", "andrew", "anthony", "arthur",
        "ben", "benjamin", "bill", "bob", "brian", "carl", "charles", "chris", "daniel", "david",
        "donald", "edward", "eric", "frank", "fred", "george", "harry", "henry", "jack", "jacob",
        "james", "jason", "jeff", "joe", "john", "jonathan", "joseph", "kevin", "mark", "martin",
        "matthew", "michael", "nick", "paul", "peter", "richard", "robert", "ryan", "sam",
        "samuel", "steve", "steven", "thomas", "tim", "tom", "william",
    ]);

    set.extend([
        "alice", "amanda", "amy", "anna", "barbara", "betty", "carol", "catherine", "charlotte",
        "claire", "diana", "elizabeth", "emily", "emma", "grace", "hannah", "helen", "jane",
        "jennifer", "jessica", "julia", "karen", "kate", "laura", "linda", "lisa", "lucy",
        "margaret", "maria", "mary", "michelle", "nancy", "olivia", "rachel", "rebecca", "sarah",
        "sophia", "susan", "taylor", "victoria",
    ]);

    set
});

/// Check whether a lowercase span names a known place.
pub fn is_place(span: &str) -> bool {
    PLACES.contains(span)
}

/// Check whether a lowercase span names a known organization.
pub fn is_organization(span: &str) -> bool {
    ORGANIZATIONS.contains(span)
}

/// Check whether a lowercase word ends an organization name.
pub fn is_organization_indicator(word: &str) -> bool {
    ORGANIZATION_INDICATORS.contains(word.trim_end_matches('.'))
}

/// Check whether a lowercase word opens an organization name.
pub fn is_organization_prefix(word: &str) -> bool {
    ORGANIZATION_PREFIXES.contains(word)
}

/// Check whether a lowercase word is a person title.
pub fn is_person_title(word: &str) -> bool {
    PERSON_TITLES.contains(word.trim_end_matches('.'))
}

/// Check whether a lowercase word is a known given name.
pub fn is_first_name(word: &str) -> bool {
    FIRST_NAMES.contains(word)
}
