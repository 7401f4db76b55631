//! Endpoint descriptor table.
//!
//! Every remote operation is data: a route, the parameters it accepts, and
//! the shape of a successful response. The typed methods on the sub-clients
//! build a [`Params`] map and hand it to
//! [`AmethysteHttp::call`](crate::http::AmethysteHttp::call) with the matching
//! descriptor from this module.

use crate::error::UsageError;
use crate::shared::{Omissible, Params};

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

/// What a successful response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnShape {
    /// Image or animation data.
    Bytes,
    /// A JSON document.
    Json,
}

impl ReturnShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::Json => "json",
        }
    }
}

/// Static description of one remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    /// SDK method name, e.g. `"three_thousand_years"`.
    pub operation: &'static str,
    pub method: HttpMethod,
    /// Route suffix appended to the base URL.
    pub route: &'static str,
    /// Parameters that must be provided on every call.
    pub required: &'static [&'static str],
    /// Parameters that may be omitted.
    pub optional: &'static [&'static str],
    pub returns: ReturnShape,
}

impl EndpointDescriptor {
    pub fn accepts(&self, name: &str) -> bool {
        self.required.iter().chain(self.optional).any(|p| *p == name)
    }

    /// Check a parameter set: no unknown names, every required name provided.
    ///
    /// # Errors
    ///
    /// [`UsageError::UnknownParameter`] or [`UsageError::MissingParameter`].
    pub fn validate(&self, params: &Params) -> Result<(), UsageError> {
        if let Some(unknown) = params.names().find(|n| !self.accepts(n)) {
            return Err(UsageError::UnknownParameter {
                operation: self.operation,
                parameter: unknown.to_string(),
            });
        }
        for name in self.required {
            if !matches!(params.get(name), Some(Omissible::Provided(_))) {
                return Err(UsageError::MissingParameter {
                    operation: self.operation,
                    parameter: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

macro_rules! generator {
    ($op:literal, $route:literal, [$($req:literal),*], [$($opt:literal),*]) => {
        EndpointDescriptor {
            operation: $op,
            method: HttpMethod::Post,
            route: concat!("/generate/", $route),
            required: &[$($req),*],
            optional: &[$($opt),*],
            returns: ReturnShape::Bytes,
        }
    };
    ($op:literal, $route:literal) => {
        generator!($op, $route, ["url"], [])
    };
}

// ─── Metadata ────────────────────────────────────────────────────────────────

pub const LIST_ENDPOINTS: EndpointDescriptor = EndpointDescriptor {
    operation: "list_endpoints",
    method: HttpMethod::Get,
    route: "/generate",
    required: &[],
    optional: &[],
    returns: ReturnShape::Json,
};

pub const RANDOM_WALLPAPER: EndpointDescriptor = EndpointDescriptor {
    operation: "random_wallpaper",
    method: HttpMethod::Get,
    route: "/image/wallpaper",
    required: &[],
    optional: &[],
    returns: ReturnShape::Json,
};

// ─── Generators ──────────────────────────────────────────────────────────────

pub const THREE_THOUSAND_YEARS: EndpointDescriptor = generator!("three_thousand_years", "3000years");
pub const APPROVED: EndpointDescriptor = generator!("approved", "approved");
pub const AFUSION: EndpointDescriptor = generator!("afusion", "afusion");
pub const BADGE: EndpointDescriptor = generator!(
    "badge",
    "badge",
    ["url", "text", "numberserver", "numberusers"],
    []
);
pub const BATSLAP: EndpointDescriptor = generator!("batslap", "batslap", ["avatar", "url"], []);
pub const BEAUTIFUL: EndpointDescriptor = generator!("beautiful", "beautiful");
pub const BLUR: EndpointDescriptor = generator!("blur", "blur", ["url"], ["blur"]);
pub const BLURPLE: EndpointDescriptor = generator!("blurple", "blurple", ["url"], ["invert"]);
pub const BRAZZERS: EndpointDescriptor = generator!("brazzers", "brazzers");
pub const BURN: EndpointDescriptor = generator!("burn", "burn");
pub const CHALLENGER: EndpointDescriptor = generator!("challenger", "challenger");
pub const CIRCLE: EndpointDescriptor = generator!("circle", "circle");
pub const CONTRAST: EndpointDescriptor = generator!("contrast", "contrast");
pub const CRUSH: EndpointDescriptor = generator!("crush", "crush");
pub const FACEBOOK: EndpointDescriptor = generator!("facebook", "facebook", ["url", "text"], []);
pub const DDUNGEON: EndpointDescriptor = generator!("ddungeon", "ddungeon");
pub const DEEPFRY: EndpointDescriptor = generator!("deepfry", "deepfry");
pub const DICTATOR: EndpointDescriptor = generator!("dictator", "dictator");
pub const DISCORD_HOUSE: EndpointDescriptor =
    generator!("discord_house", "discordhouse", ["url", "house"], []);
pub const DISTORT: EndpointDescriptor = generator!("distort", "distort");
pub const DITHER565: EndpointDescriptor = generator!("dither565", "dither565");
pub const EMBOSS: EndpointDescriptor = generator!("emboss", "emboss");
pub const FIRE: EndpointDescriptor = generator!("fire", "fire");
pub const FRAME: EndpointDescriptor = generator!("frame", "frame");
pub const GAY: EndpointDescriptor = generator!("gay", "gay");
pub const GLITCH: EndpointDescriptor = generator!("glitch", "glitch");
pub const GREYPLE: EndpointDescriptor = generator!("greyple", "greyple", ["url"], ["invert"]);
pub const GREYSCALE: EndpointDescriptor = generator!("greyscale", "greyscale");
pub const INSTAGRAM: EndpointDescriptor = generator!("instagram", "instagram");
pub const INVERT: EndpointDescriptor = generator!("invert", "invert");
pub const JAIL: EndpointDescriptor = generator!("jail", "jail");
pub const LOOK_WHAT_KAREN_HAVE: EndpointDescriptor =
    generator!("look_what_karen_have", "lookwhatkarenhave");
pub const MAGIK: EndpointDescriptor = generator!("magik", "magik");
pub const MISSION_PASSED: EndpointDescriptor = generator!("mission_passed", "missionpassed");
pub const MOUSTACHE: EndpointDescriptor = generator!("moustache", "moustache");
pub const PIXELIZE: EndpointDescriptor = generator!("pixelize", "pixelize", ["url"], ["pixelize"]);
pub const PLAYSTATION_FOUR: EndpointDescriptor = generator!("playstation_four", "ps4");
pub const POSTERIZE: EndpointDescriptor = generator!("posterize", "posterize");
pub const REJECTED: EndpointDescriptor = generator!("rejected", "rejected");
pub const REDPLE: EndpointDescriptor = generator!("redple", "redple", ["url"], ["invert"]);
pub const REST_IN_PEACE: EndpointDescriptor = generator!("rest_in_peace", "rip");
pub const SCARY: EndpointDescriptor = generator!("scary", "scary");
pub const SEPIA: EndpointDescriptor = generator!("sepia", "sepia");
pub const SHARPEN: EndpointDescriptor = generator!("sharpen", "sharpen");
pub const SNIPER: EndpointDescriptor = generator!("sniper", "sniper");
pub const STEAM_CARD: EndpointDescriptor =
    generator!("steam_card", "steamcard", ["url", "text"], []);
pub const SYMMETRY: EndpointDescriptor =
    generator!("symmetry", "symmetry", ["url", "orientation"], []);
pub const THANOS: EndpointDescriptor = generator!("thanos", "thanos");
pub const TRINITY: EndpointDescriptor = generator!("trinity", "trinity", ["url", "type"], []);
pub const TO_BE_CONTINUED: EndpointDescriptor = generator!("to_be_continued", "tobecontinued");
pub const TWITTER: EndpointDescriptor = generator!(
    "twitter",
    "twitter",
    ["url", "avatar1", "avatar2", "avatar3", "text"],
    []
);
pub const SPIN: EndpointDescriptor = generator!("spin", "spin");
pub const SUBZERO: EndpointDescriptor = generator!("subzero", "subzero");
pub const TRIGGERED: EndpointDescriptor = generator!(
    "triggered",
    "triggered",
    ["url"],
    ["blur", "greyscale", "horizontal", "invert", "sepia", "vertical"]
);
pub const UNSHARPEN: EndpointDescriptor = generator!("unsharpen", "unsharpen");
pub const ULTIMATE_TATTOO: EndpointDescriptor = generator!("ultimate_tattoo", "utatoo");
pub const VERSUS: EndpointDescriptor = generator!("versus", "vs", ["url", "avatar", "type"], []);
pub const WANTED: EndpointDescriptor = generator!("wanted", "wanted");
pub const WASTED: EndpointDescriptor = generator!("wasted", "wasted");
pub const WHO_WOULD_WIN: EndpointDescriptor =
    generator!("who_would_win", "whowouldwin", ["url", "avatar"], []);

/// Every descriptor, metadata lookups first.
pub const ENDPOINTS: &[EndpointDescriptor] = &[
    LIST_ENDPOINTS,
    RANDOM_WALLPAPER,
    THREE_THOUSAND_YEARS,
    APPROVED,
    AFUSION,
    BADGE,
    BATSLAP,
    BEAUTIFUL,
    BLUR,
    BLURPLE,
    BRAZZERS,
    BURN,
    CHALLENGER,
    CIRCLE,
    CONTRAST,
    CRUSH,
    FACEBOOK,
    DDUNGEON,
    DEEPFRY,
    DICTATOR,
    DISCORD_HOUSE,
    DISTORT,
    DITHER565,
    EMBOSS,
    FIRE,
    FRAME,
    GAY,
    GLITCH,
    GREYPLE,
    GREYSCALE,
    INSTAGRAM,
    INVERT,
    JAIL,
    LOOK_WHAT_KAREN_HAVE,
    MAGIK,
    MISSION_PASSED,
    MOUSTACHE,
    PIXELIZE,
    PLAYSTATION_FOUR,
    POSTERIZE,
    REJECTED,
    REDPLE,
    REST_IN_PEACE,
    SCARY,
    SEPIA,
    SHARPEN,
    SNIPER,
    STEAM_CARD,
    SYMMETRY,
    THANOS,
    TRINITY,
    TO_BE_CONTINUED,
    TWITTER,
    SPIN,
    SUBZERO,
    TRIGGERED,
    UNSHARPEN,
    ULTIMATE_TATTOO,
    VERSUS,
    WANTED,
    WASTED,
    WHO_WOULD_WIN,
];

/// Alternate spellings: `(alias, canonical operation)`.
pub const ALIASES: &[(&str, &str)] = &[("grayscale", "greyscale"), ("grayple", "greyple")];

/// Look up a descriptor by operation name, accepting alias spellings.
pub fn find(operation: &str) -> Option<&'static EndpointDescriptor> {
    let canonical = ALIASES
        .iter()
        .find(|(alias, _)| *alias == operation)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(operation);
    ENDPOINTS.iter().find(|e| e.operation == canonical)
}
