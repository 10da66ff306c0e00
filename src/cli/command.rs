/// A parsed prompt line. Parsing is separate from execution so that
/// dispatch can be tested without touching the network.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Countries,
    Country(u64),
    Cities,
    CountryCities(u64),
    City(u64),
    CityItems(u64),
    CityTopItems(u64),
    Item(u64),
    ItemLocations(u64),
    ItemReviews(u64),
    ItemImages(u64),
    ItemVotes(u64),
    Tags,
    TagItems(u64),
    SetKey(String),
    Last,
    Help,
    Clear,
    Exit,
    Empty,
    Unknown(String),
    Usage(&'static str),
}

impl Command {
    /// Parse one line of user input
    pub fn parse(line: &str) -> Command {
        let parts: Vec<&str> = line.trim().split_whitespace().collect();
        match parts.as_slice() {
            [] => Command::Empty,
            ["exit"] | ["quit"] => Command::Exit,
            ["help"] => Command::Help,
            ["clear"] => Command::Clear,
            ["last"] => Command::Last,
            ["countries"] => Command::Countries,
            ["country", id] => parse_id(*id, "country <id>", Command::Country),
            ["cities"] => Command::Cities,
            ["cities", id] => parse_id(*id, "cities <country_id>", Command::CountryCities),
            ["city", id] => parse_id(*id, "city <id>", Command::City),
            ["items", id] => parse_id(*id, "items <city_id>", Command::CityItems),
            ["top", id] => parse_id(*id, "top <city_id>", Command::CityTopItems),
            ["item", id] => parse_id(*id, "item <id>", Command::Item),
            ["locations", id] => parse_id(*id, "locations <item_id>", Command::ItemLocations),
            ["reviews", id] => parse_id(*id, "reviews <item_id>", Command::ItemReviews),
            ["images", id] => parse_id(*id, "images <item_id>", Command::ItemImages),
            ["votes", id] => parse_id(*id, "votes <item_id>", Command::ItemVotes),
            ["tags"] => Command::Tags,
            ["tag", id] => parse_id(*id, "tag <id>", Command::TagItems),
            ["key", value] => Command::SetKey(value.to_string()),
            ["key"] => Command::Usage("key <api_key>"),
            ["country"] => Command::Usage("country <id>"),
            ["city"] => Command::Usage("city <id>"),
            ["items"] => Command::Usage("items <city_id>"),
            ["top"] => Command::Usage("top <city_id>"),
            ["item"] => Command::Usage("item <id>"),
            ["locations"] => Command::Usage("locations <item_id>"),
            ["reviews"] => Command::Usage("reviews <item_id>"),
            ["images"] => Command::Usage("images <item_id>"),
            ["votes"] => Command::Usage("votes <item_id>"),
            ["tag"] => Command::Usage("tag <id>"),
            [cmd, ..] => Command::Unknown(cmd.to_string()),
        }
    }
}

fn parse_id(raw: &str, usage: &'static str, build: fn(u64) -> Command) -> Command {
    match raw.parse::<u64>() {
        Ok(id) => build(id),
        Err(_) => Command::Usage(usage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_without_arguments() {
        assert_eq!(Command::parse("countries"), Command::Countries);
        assert_eq!(Command::parse("  tags  "), Command::Tags);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("quit"), Command::Exit);
    }

    #[test]
    fn parses_commands_with_ids() {
        assert_eq!(Command::parse("country 5"), Command::Country(5));
        assert_eq!(Command::parse("cities 5"), Command::CountryCities(5));
        assert_eq!(Command::parse("top 42"), Command::CityTopItems(42));
        assert_eq!(Command::parse("reviews 7"), Command::ItemReviews(7));
    }

    #[test]
    fn rejects_malformed_ids_with_usage() {
        assert_eq!(Command::parse("country five"), Command::Usage("country <id>"));
        assert_eq!(Command::parse("item -3"), Command::Usage("item <id>"));
        assert_eq!(Command::parse("votes"), Command::Usage("votes <item_id>"));
    }

    #[test]
    fn unknown_commands_are_reported_verbatim() {
        assert_eq!(
            Command::parse("frobnicate 1"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn parses_key_swap() {
        assert_eq!(
            Command::parse("key s3cret"),
            Command::SetKey("s3cret".to_string())
        );
        assert_eq!(Command::parse("key"), Command::Usage("key <api_key>"));
    }
}
