/// Environment variable naming the IANA time zone civil dates are read in.
pub const TIME_ZONE_ENV: &str = "MSEARCH_TZ";
/// Number of positional slots of the backend message search call.
pub const SEARCH_PARAM_ARITY: usize = 16;
