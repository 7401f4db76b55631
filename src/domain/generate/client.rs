//! Generate sub-client: one method per image generator.
//!
//! Every method returns the raw PNG or GIF data.

use crate::client::AmethysteClient;
use crate::domain::generate::{HypesquadHouse, Orientation, TriggeredOptions, TrinityType, VersusColor};
use crate::endpoints::{self, EndpointDescriptor};
use crate::error::SdkResult;
use crate::shared::{Omissible, Params};

/// Sub-client for `/generate/*` operations.
pub struct Generate<'a> {
    pub(crate) client: &'a AmethysteClient,
}

macro_rules! url_only {
    ($($(#[$meta:meta])* $name:ident => $endpoint:ident;)*) => {
        $(
            $(#[$meta])*
            pub async fn $name(&self, image_url: &str) -> SdkResult<Vec<u8>> {
                self.run(&endpoints::$endpoint, Params::new().with("url", image_url))
                    .await
            }
        )*
    };
}

impl<'a> Generate<'a> {
    /// Call a generator by its route name, bypassing the descriptor table.
    ///
    /// Useful for generators the server lists in
    /// [`Meta::free_endpoints`](crate::domain::meta::client::Meta::free_endpoints)
    /// that this SDK has no typed method for.
    pub async fn raw(&self, name: &str, params: Params) -> SdkResult<Vec<u8>> {
        self.client.http.generate(name, &params).await
    }

    url_only! {
        three_thousand_years => THREE_THOUSAND_YEARS;
        approved => APPROVED;
        afusion => AFUSION;
        beautiful => BEAUTIFUL;
        brazzers => BRAZZERS;
        burn => BURN;
        challenger => CHALLENGER;
        circle => CIRCLE;
        contrast => CONTRAST;
        crush => CRUSH;
        ddungeon => DDUNGEON;
        deepfry => DEEPFRY;
        dictator => DICTATOR;
        distort => DISTORT;
        dither565 => DITHER565;
        emboss => EMBOSS;
        fire => FIRE;
        frame => FRAME;
        gay => GAY;
        glitch => GLITCH;
        instagram => INSTAGRAM;
        invert => INVERT;
        jail => JAIL;
        look_what_karen_have => LOOK_WHAT_KAREN_HAVE;
        magik => MAGIK;
        mission_passed => MISSION_PASSED;
        moustache => MOUSTACHE;
        playstation_four => PLAYSTATION_FOUR;
        posterize => POSTERIZE;
        rejected => REJECTED;
        rest_in_peace => REST_IN_PEACE;
        scary => SCARY;
        sepia => SEPIA;
        sharpen => SHARPEN;
        sniper => SNIPER;
        thanos => THANOS;
        to_be_continued => TO_BE_CONTINUED;
        /// Animated GIF.
        spin => SPIN;
        subzero => SUBZERO;
        unsharpen => UNSHARPEN;
        ultimate_tattoo => ULTIMATE_TATTOO;
        wanted => WANTED;
        wasted => WASTED;
    }

    pub async fn greyscale(&self, image_url: &str) -> SdkResult<Vec<u8>> {
        self.run(&endpoints::GREYSCALE, Params::new().with("url", image_url))
            .await
    }

    /// Alternate spelling of [`greyscale`](Self::greyscale).
    pub async fn grayscale(&self, image_url: &str) -> SdkResult<Vec<u8>> {
        self.greyscale(image_url).await
    }

    pub async fn greyple(&self, image_url: &str, invert: Omissible<bool>) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with_opt("invert", invert);
        self.run(&endpoints::GREYPLE, params).await
    }

    /// Alternate spelling of [`greyple`](Self::greyple).
    pub async fn grayple(&self, image_url: &str, invert: Omissible<bool>) -> SdkResult<Vec<u8>> {
        self.greyple(image_url, invert).await
    }

    pub async fn blurple(&self, image_url: &str, invert: Omissible<bool>) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with_opt("invert", invert);
        self.run(&endpoints::BLURPLE, params).await
    }

    pub async fn redple(&self, image_url: &str, invert: Omissible<bool>) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with_opt("invert", invert);
        self.run(&endpoints::REDPLE, params).await
    }

    /// Blur an image. The server defaults `amount` to 5.
    pub async fn blur(&self, image_url: &str, amount: Omissible<u32>) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with_opt("blur", amount);
        self.run(&endpoints::BLUR, params).await
    }

    pub async fn pixelize(&self, image_url: &str, amount: Omissible<u32>) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with_opt("pixelize", amount);
        self.run(&endpoints::PIXELIZE, params).await
    }

    pub async fn badge(
        &self,
        avatar_url: &str,
        username: &str,
        servers: u64,
        users: u64,
    ) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", avatar_url)
            .with("text", username)
            .with("numberserver", servers)
            .with("numberusers", users);
        self.run(&endpoints::BADGE, params).await
    }

    /// `image_url` slaps `target_image_url`.
    pub async fn batslap(&self, image_url: &str, target_image_url: &str) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("avatar", image_url)
            .with("url", target_image_url);
        self.run(&endpoints::BATSLAP, params).await
    }

    pub async fn facebook(&self, image_url: &str, text: &str) -> SdkResult<Vec<u8>> {
        let params = Params::new().with("url", image_url).with("text", text);
        self.run(&endpoints::FACEBOOK, params).await
    }

    pub async fn steam_card(&self, image_url: &str, text: &str) -> SdkResult<Vec<u8>> {
        let params = Params::new().with("url", image_url).with("text", text);
        self.run(&endpoints::STEAM_CARD, params).await
    }

    pub async fn discord_house(&self, image_url: &str, house: HypesquadHouse) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with("house", house.as_str());
        self.run(&endpoints::DISCORD_HOUSE, params).await
    }

    pub async fn symmetry(&self, image_url: &str, orientation: Orientation) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with("orientation", orientation.as_str());
        self.run(&endpoints::SYMMETRY, params).await
    }

    pub async fn trinity(&self, image_url: &str, kind: TrinityType) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", image_url)
            .with("type", kind.as_str());
        self.run(&endpoints::TRINITY, params).await
    }

    pub async fn twitter(
        &self,
        image_url: &str,
        avatars: [&str; 3],
        text: &str,
    ) -> SdkResult<Vec<u8>> {
        let [avatar1, avatar2, avatar3] = avatars;
        let params = Params::new()
            .with("url", image_url)
            .with("avatar1", avatar1)
            .with("avatar2", avatar2)
            .with("avatar3", avatar3)
            .with("text", text);
        self.run(&endpoints::TWITTER, params).await
    }

    /// Animated GIF.
    ///
    /// # Errors
    ///
    /// Returns [`UsageError::ConflictingAlias`](crate::error::UsageError::ConflictingAlias)
    /// without touching the network if `greyscale` and `grayscale` disagree.
    pub async fn triggered(&self, image_url: &str, options: TriggeredOptions) -> SdkResult<Vec<u8>> {
        let params = options.to_params(image_url)?;
        self.run(&endpoints::TRIGGERED, params).await
    }

    pub async fn versus(
        &self,
        left_image_url: &str,
        right_image_url: &str,
        color: VersusColor,
    ) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", left_image_url)
            .with("avatar", right_image_url)
            .with("type", color.as_str());
        self.run(&endpoints::VERSUS, params).await
    }

    pub async fn who_would_win(
        &self,
        left_image_url: &str,
        right_image_url: &str,
    ) -> SdkResult<Vec<u8>> {
        let params = Params::new()
            .with("url", left_image_url)
            .with("avatar", right_image_url);
        self.run(&endpoints::WHO_WOULD_WIN, params).await
    }

    async fn run(&self, endpoint: &EndpointDescriptor, params: Params) -> SdkResult<Vec<u8>> {
        self.client.http.call(endpoint, &params).await?.into_bytes()
    }
}
