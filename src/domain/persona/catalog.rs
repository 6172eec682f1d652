//! Fixed persona profiles and their starter packs.

use serde::Serialize;

use super::PersonaType;

/// A curated set of pieces to start a persona's wardrobe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarterPack {
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub tags: Vec<String>,
}

pub(super) struct PackProfile {
    name: &'static str,
    emoji: &'static str,
    description: &'static str,
    tags: [&'static str; 4],
}

pub(super) struct PersonaProfile {
    pub title: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub tags: [&'static str; 6],
    packs: [PackProfile; 2],
}

impl PersonaProfile {
    pub fn starter_packs(&self) -> Vec<StarterPack> {
        self.packs
            .iter()
            .map(|p| StarterPack {
                name: p.name.to_string(),
                emoji: p.emoji.to_string(),
                description: p.description.to_string(),
                tags: p.tags.iter().map(|t| t.to_string()).collect(),
            })
            .collect()
    }
}

pub(super) fn profile(persona: PersonaType) -> &'static PersonaProfile {
    match persona {
        PersonaType::DreamyRomantic => &DREAMY_ROMANTIC,
        PersonaType::SereneMinimalist => &SERENE_MINIMALIST,
        PersonaType::BoldRebel => &BOLD_REBEL,
        PersonaType::ArtsyVintageSoul => &ARTSY_VINTAGE_SOUL,
        PersonaType::GlamorousSocialite => &GLAMOROUS_SOCIALITE,
        PersonaType::BalancedChic => &BALANCED_CHIC,
    }
}

static DREAMY_ROMANTIC: PersonaProfile = PersonaProfile {
    title: "Dreamy Romantic",
    emoji: "🌸",
    description: "You float through life in soft fabrics and sweet details. Ruffles, bows and blush tones are your love language.",
    tags: ["coquette", "soft girl", "pastel", "lace", "feminine", "dreamy"],
    packs: [
        PackProfile {
            name: "Coquette Essentials",
            emoji: "🎀",
            description: "Bows, lace trims and ballet flats for everyday sweetness.",
            tags: ["coquette", "bows", "lace", "pink"],
        },
        PackProfile {
            name: "Garden Party",
            emoji: "🌷",
            description: "Floral midi dresses and pearl accents for sunny afternoons.",
            tags: ["floral", "midi dress", "pearls", "pastel"],
        },
    ],
};

static SERENE_MINIMALIST: PersonaProfile = PersonaProfile {
    title: "Serene Minimalist",
    emoji: "🤍",
    description: "Calm, intentional and effortlessly put together. Every piece in your closet earns its place.",
    tags: ["minimal", "neutral", "capsule", "clean lines", "timeless", "quiet luxury"],
    packs: [
        PackProfile {
            name: "Capsule Wardrobe",
            emoji: "🧺",
            description: "Ten neutral staples that mix into a month of outfits.",
            tags: ["capsule", "neutral", "basics", "versatile"],
        },
        PackProfile {
            name: "Quiet Luxury",
            emoji: "🕊️",
            description: "Cashmere knits, tailored trousers and understated leather.",
            tags: ["cashmere", "tailored", "beige", "leather"],
        },
    ],
};

static BOLD_REBEL: PersonaProfile = PersonaProfile {
    title: "Bold Rebel",
    emoji: "🖤",
    description: "Rules are suggestions and black goes with everything. Your outfits make an entrance before you do.",
    tags: ["edgy", "streetwear", "monochrome", "leather", "grunge", "statement"],
    packs: [
        PackProfile {
            name: "Street Edge",
            emoji: "⛓️",
            description: "Cargo pants, chunky boots and oversized graphic layers.",
            tags: ["streetwear", "cargo", "boots", "oversized"],
        },
        PackProfile {
            name: "After Dark",
            emoji: "🌙",
            description: "Leather jackets, silver jewelry and all-black everything.",
            tags: ["leather", "black", "silver", "night out"],
        },
    ],
};

static ARTSY_VINTAGE_SOUL: PersonaProfile = PersonaProfile {
    title: "Artsy Vintage Soul",
    emoji: "🎨",
    description: "Thrift finds, gallery afternoons and outfits with a story. You dress like a curated museum exhibit.",
    tags: ["vintage", "thrifted", "retro", "artsy", "eclectic", "cottagecore"],
    packs: [
        PackProfile {
            name: "Thrift Treasures",
            emoji: "🕰️",
            description: "Secondhand cardigans, retro denim and statement collars.",
            tags: ["thrifted", "retro", "denim", "cardigan"],
        },
        PackProfile {
            name: "Gallery Day",
            emoji: "🖼️",
            description: "Bold prints, berets and artful color blocking.",
            tags: ["prints", "beret", "color block", "artsy"],
        },
    ],
};

static GLAMOROUS_SOCIALITE: PersonaProfile = PersonaProfile {
    title: "Glamorous Socialite",
    emoji: "💎",
    description: "Every day is an event and you are always dressed for it. Rich colors and a little sparkle never hurt anyone.",
    tags: ["glam", "jewel tones", "sparkle", "evening", "luxe", "statement"],
    packs: [
        PackProfile {
            name: "Red Carpet Ready",
            emoji: "✨",
            description: "Satin slip dresses, heels and statement earrings.",
            tags: ["satin", "heels", "earrings", "glam"],
        },
        PackProfile {
            name: "Jet Set",
            emoji: "✈️",
            description: "Polished travel looks in emerald, sapphire and ruby.",
            tags: ["travel", "emerald", "sapphire", "polished"],
        },
    ],
};

static BALANCED_CHIC: PersonaProfile = PersonaProfile {
    title: "Balanced Chic",
    emoji: "💖",
    description: "A little of everything and all of it works. You adapt your style to the moment without losing yourself.",
    tags: ["versatile", "casual", "chic", "everyday", "effortless", "mix and match"],
    packs: [
        PackProfile {
            name: "Everyday Icon",
            emoji: "👟",
            description: "Great jeans, crisp tees and sneakers that go anywhere.",
            tags: ["jeans", "tees", "sneakers", "casual"],
        },
        PackProfile {
            name: "Weekend Mood",
            emoji: "☕",
            description: "Cozy knits and easy layers for slow days out.",
            tags: ["knits", "layered", "cozy", "weekend"],
        },
    ],
};
