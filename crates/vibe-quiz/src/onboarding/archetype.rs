use serde::{Deserialize, Serialize};

/// One of the two disjoint audience groups the quiz can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Population {
    Female,
    Male,
}

impl Population {
    pub const fn ordered() -> [Self; 2] {
        [Self::Female, Self::Male]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

/// Named display colors used by archetype theming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tint {
    Black,
    Blue,
    Brown,
    Cyan,
    Gray,
    Green,
    Mint,
    Orange,
    Pink,
    Purple,
    Red,
    White,
    Yellow,
}

impl Tint {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Blue => "Blue",
            Self::Brown => "Brown",
            Self::Cyan => "Cyan",
            Self::Gray => "Gray",
            Self::Green => "Green",
            Self::Mint => "Mint",
            Self::Orange => "Orange",
            Self::Pink => "Pink",
            Self::Purple => "Purple",
            Self::Red => "Red",
            Self::White => "White",
            Self::Yellow => "Yellow",
        }
    }
}

/// Closed set of style archetypes a quiz can resolve to.
///
/// Declaration order is the catalog order: `ordered()` returns it, derived
/// `Ord` follows it, and score ranking uses it as the tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    // Female population
    MainCharacter,
    CozyChic,
    BoldVisionary,
    DreamyMuse,
    MysteryIcon,
    GlowGetter,
    AdventureSeeker,
    PlayfulSprite,
    ChicRebel,
    NostalgiaVibes,
    SocialButterfly,
    SereneSoul,
    // Male population
    AlphaVibe,
    StreetSage,
    UrbanExplorer,
    MinimalistMaven,
    CreativeGenius,
    TechTitan,
    RuggedGentleman,
    SocialMagnet,
    VintageVibes,
    ZenMaster,
    BoldRebel,
    CharismaticLeader,
}

impl Archetype {
    pub const COUNT: usize = 24;

    /// Fallback primary when a resolution pass has no scored archetypes.
    pub const fn default_primary() -> Self {
        Self::MainCharacter
    }

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::MainCharacter,
            Self::CozyChic,
            Self::BoldVisionary,
            Self::DreamyMuse,
            Self::MysteryIcon,
            Self::GlowGetter,
            Self::AdventureSeeker,
            Self::PlayfulSprite,
            Self::ChicRebel,
            Self::NostalgiaVibes,
            Self::SocialButterfly,
            Self::SereneSoul,
            Self::AlphaVibe,
            Self::StreetSage,
            Self::UrbanExplorer,
            Self::MinimalistMaven,
            Self::CreativeGenius,
            Self::TechTitan,
            Self::RuggedGentleman,
            Self::SocialMagnet,
            Self::VintageVibes,
            Self::ZenMaster,
            Self::BoldRebel,
            Self::CharismaticLeader,
        ]
    }

    pub const fn roster(population: Population) -> [Self; 12] {
        match population {
            Population::Female => [
                Self::MainCharacter,
                Self::CozyChic,
                Self::BoldVisionary,
                Self::DreamyMuse,
                Self::MysteryIcon,
                Self::GlowGetter,
                Self::AdventureSeeker,
                Self::PlayfulSprite,
                Self::ChicRebel,
                Self::NostalgiaVibes,
                Self::SocialButterfly,
                Self::SereneSoul,
            ],
            Population::Male => [
                Self::AlphaVibe,
                Self::StreetSage,
                Self::UrbanExplorer,
                Self::MinimalistMaven,
                Self::CreativeGenius,
                Self::TechTitan,
                Self::RuggedGentleman,
                Self::SocialMagnet,
                Self::VintageVibes,
                Self::ZenMaster,
                Self::BoldRebel,
                Self::CharismaticLeader,
            ],
        }
    }

    pub const fn population(self) -> Population {
        match self {
            Self::MainCharacter
            | Self::CozyChic
            | Self::BoldVisionary
            | Self::DreamyMuse
            | Self::MysteryIcon
            | Self::GlowGetter
            | Self::AdventureSeeker
            | Self::PlayfulSprite
            | Self::ChicRebel
            | Self::NostalgiaVibes
            | Self::SocialButterfly
            | Self::SereneSoul => Population::Female,
            Self::AlphaVibe
            | Self::StreetSage
            | Self::UrbanExplorer
            | Self::MinimalistMaven
            | Self::CreativeGenius
            | Self::TechTitan
            | Self::RuggedGentleman
            | Self::SocialMagnet
            | Self::VintageVibes
            | Self::ZenMaster
            | Self::BoldRebel
            | Self::CharismaticLeader => Population::Male,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::MainCharacter => "Main Character ✨",
            Self::CozyChic => "Cozy Chic ☕",
            Self::BoldVisionary => "Bold Visionary 💥",
            Self::DreamyMuse => "Dreamy Muse 🌙",
            Self::MysteryIcon => "Mystery Icon 🕶️",
            Self::GlowGetter => "Glow Getter 🌞",
            Self::AdventureSeeker => "Adventure Seeker 🌍",
            Self::PlayfulSprite => "Playful Sprite 🌸",
            Self::ChicRebel => "Chic Rebel 🔥",
            Self::NostalgiaVibes => "Nostalgia Vibes 📼",
            Self::SocialButterfly => "Social Butterfly 🦋",
            Self::SereneSoul => "Serene Soul 🌊",
            Self::AlphaVibe => "Alpha Vibe 👑",
            Self::StreetSage => "Street Sage 🏙️",
            Self::UrbanExplorer => "Urban Explorer 🚶‍♂️",
            Self::MinimalistMaven => "Minimalist Maven ⚪",
            Self::CreativeGenius => "Creative Genius 🎨",
            Self::TechTitan => "Tech Titan 💻",
            Self::RuggedGentleman => "Rugged Gentleman 🧔",
            Self::SocialMagnet => "Social Magnet 🧲",
            Self::VintageVibes => "Vintage Vibes 📻",
            Self::ZenMaster => "Zen Master 🧘‍♂️",
            Self::BoldRebel => "Bold Rebel ⚡",
            Self::CharismaticLeader => "Charismatic Leader 🎯",
        }
    }

    pub const fn blurb(self) -> &'static str {
        match self {
            Self::MainCharacter => "Cinematic, confident, center-frame energy.",
            Self::CozyChic => "Warm, polished, Pinterest-coded mornings.",
            Self::BoldVisionary => "Fearless color and unapologetic presence.",
            Self::DreamyMuse => "Poetic, soft, golden-hour heart.",
            Self::MysteryIcon => "Seen. Not decoded. Carry on.",
            Self::GlowGetter => "Inside-out glow, main-quest energy.",
            Self::AdventureSeeker => "New horizons, wide-open wonder.",
            Self::PlayfulSprite => "Stickers, sparkle, serotonin.",
            Self::ChicRebel => "Rules bent — eyeliner sharp.",
            Self::NostalgiaVibes => "Grain, film, and golden memories.",
            Self::SocialButterfly => "Group sparkle: activated.",
            Self::SereneSoul => "Ocean-brain. Cloud-heart.",
            Self::AlphaVibe => "Confident, commanding, natural leader energy.",
            Self::StreetSage => "Urban wisdom, street-smart, authentic vibes.",
            Self::UrbanExplorer => "City wanderer, always discovering new spots.",
            Self::MinimalistMaven => "Clean lines, less is more, refined taste.",
            Self::CreativeGenius => "Artistic soul, innovative, boundary-pushing.",
            Self::TechTitan => "Digital native, innovation-driven, future-focused.",
            Self::RuggedGentleman => "Rough around the edges, heart of gold.",
            Self::SocialMagnet => "People gravitate to you, natural connector.",
            Self::VintageVibes => "Retro soul, timeless style, classic cool.",
            Self::ZenMaster => "Calm center, mindful, grounded energy.",
            Self::BoldRebel => "Rule breaker, trend setter, unapologetic.",
            Self::CharismaticLeader => "Natural charisma, inspiring, magnetic presence.",
        }
    }

    /// Long-form result copy shown on the classification summary.
    pub const fn analysis(self) -> &'static str {
        match self {
            Self::MainCharacter => "Center frame, star soundtrack.",
            Self::CozyChic => "You thrive in cozy, polished, intentional spaces.",
            Self::BoldVisionary => "Fearless with color, unapologetically bold.",
            Self::DreamyMuse => "Soft and poetic, always chasing golden hour.",
            Self::MysteryIcon => "Private, magnetic, and hard to decode.",
            Self::GlowGetter => "Your glow lights up everything around you.",
            Self::AdventureSeeker => "Restless spirit, open skies, new horizons.",
            Self::PlayfulSprite => "Playful, carefree, serotonin in human form.",
            Self::ChicRebel => "You bend the rules with effortless style.",
            Self::NostalgiaVibes => "Grounded in memory, retro at heart.",
            Self::SocialButterfly => "Group sparkle: always the connector.",
            Self::SereneSoul => "Grounded, calm, and centered like the ocean.",
            Self::AlphaVibe => "Natural leader, confident energy that commands respect.",
            Self::StreetSage => "Urban wisdom, authentic street-smart vibes.",
            Self::UrbanExplorer => "City wanderer, always discovering new urban gems.",
            Self::MinimalistMaven => "Clean aesthetic, less is more, refined taste.",
            Self::CreativeGenius => "Artistic soul, innovative, always pushing boundaries.",
            Self::TechTitan => "Digital native, innovation-driven, future-focused.",
            Self::RuggedGentleman => "Rough exterior, heart of gold, authentic charm.",
            Self::SocialMagnet => "People naturally gravitate to your magnetic energy.",
            Self::VintageVibes => "Retro soul, timeless style, classic cool vibes.",
            Self::ZenMaster => "Calm center, mindful energy, grounded presence.",
            Self::BoldRebel => "Rule breaker, trend setter, unapologetically bold.",
            Self::CharismaticLeader => "Natural charisma, inspiring, magnetic presence.",
        }
    }

    pub const fn tint(self) -> Tint {
        match self {
            Self::MainCharacter | Self::MysteryIcon => Tint::Gray,
            Self::CozyChic | Self::RuggedGentleman => Tint::Brown,
            Self::BoldVisionary | Self::ChicRebel | Self::BoldRebel => Tint::Red,
            Self::DreamyMuse | Self::NostalgiaVibes | Self::CreativeGenius => Tint::Purple,
            Self::GlowGetter | Self::VintageVibes => Tint::Yellow,
            Self::AdventureSeeker | Self::SereneSoul | Self::TechTitan => Tint::Blue,
            Self::PlayfulSprite | Self::SocialButterfly => Tint::Pink,
            Self::AlphaVibe | Self::CharismaticLeader => Tint::Orange,
            Self::StreetSage | Self::UrbanExplorer => Tint::Gray,
            Self::MinimalistMaven | Self::ZenMaster => Tint::White,
            Self::SocialMagnet => Tint::Green,
        }
    }

    pub const fn secondary_tint(self) -> Tint {
        match self {
            Self::MainCharacter => Tint::Pink,
            Self::CozyChic => Tint::Brown,
            Self::BoldVisionary => Tint::Orange,
            Self::DreamyMuse => Tint::Purple,
            Self::MysteryIcon => Tint::Gray,
            Self::GlowGetter => Tint::Orange,
            Self::AdventureSeeker => Tint::Mint,
            Self::PlayfulSprite => Tint::Yellow,
            Self::ChicRebel => Tint::Black,
            Self::NostalgiaVibes => Tint::Yellow,
            Self::SocialButterfly => Tint::Purple,
            Self::SereneSoul => Tint::Mint,
            Self::AlphaVibe => Tint::Red,
            Self::StreetSage => Tint::Black,
            Self::UrbanExplorer => Tint::Blue,
            Self::MinimalistMaven => Tint::Gray,
            Self::CreativeGenius => Tint::Pink,
            Self::TechTitan => Tint::Cyan,
            Self::RuggedGentleman => Tint::Orange,
            Self::SocialMagnet => Tint::Purple,
            Self::VintageVibes => Tint::Brown,
            Self::ZenMaster => Tint::Mint,
            Self::BoldRebel => Tint::Black,
            Self::CharismaticLeader => Tint::Yellow,
        }
    }
}
