//! Placeholder variant catalog.
//!
//! Ordered, per-slot variant lists partitioned by (vibe, canonical fashion
//! style), plus the static lighting descriptors each vibe carries. The
//! catalog is compiled into the crate as `&'static` data and loaded exactly
//! once for the process lifetime; it is configuration, never mutated at
//! runtime.
//!
//! Lookup falls back in a fixed chain: exact (vibe, style), then the same
//! vibe with [`DEFAULT_STYLE`], then ([`DEFAULT_VIBE`], [`DEFAULT_STYLE`]).
//! Only when the
//! full chain yields nothing does lookup fail, and that failure means the
//! catalog data itself is wrong.

use crate::error::CoreError;
use crate::style::{FashionStyle, DEFAULT_STYLE};
use crate::token::PlaceholderToken;

/// Vibe used as the terminal catalog fallback.
pub const DEFAULT_VIBE: &str = "luxury_dark_moody";

/// All vibes with authored catalog partitions.
pub const KNOWN_VIBES: &[&str] = &["luxury_dark_moody", "urban_editorial"];

/// Variant lists for one (vibe, style) partition, keyed by full slot name.
struct StyleCatalog {
    slots: &'static [(&'static str, &'static [&'static str])],
}

impl StyleCatalog {
    fn slot(&self, name: &str) -> Option<&'static [&'static str]> {
        self.slots
            .iter()
            .find(|(slot, _)| *slot == name)
            .map(|(_, variants)| *variants)
    }
}

/* --------------------------------------------------------------------------
luxury_dark_moody / shared locations
-------------------------------------------------------------------------- */

const LUX_LOCATION_OUTDOOR: &[&str] = &[
    "on a rain-slicked penthouse terrace overlooking the city at night",
    "on the marble steps of a grand hotel entrance under warm sconces",
    "in a private courtyard with dark ivy walls and a single lantern",
    "on a rooftop bar terrace with low amber light and skyline bokeh",
    "beneath the stone arches of an old bank building after dark",
    "beside a vintage black car on a cobblestone street at dusk",
];

const LUX_LOCATION_INDOOR: &[&str] = &[
    "in a dim hotel lobby with dark wood paneling and brass fixtures",
    "beside floor-to-ceiling windows in a shadowed penthouse lounge",
    "in a private library with leather chairs and a low reading lamp",
    "at a candlelit bar with smoked glass and deep green velvet stools",
    "in a gallery hallway hung with large unlit canvases",
    "on a spiral staircase of dark marble with a single overhead spot",
];

/* --------------------------------------------------------------------------
luxury_dark_moody / business
-------------------------------------------------------------------------- */

const LUX_BUSINESS_FULLBODY_1: &[&str] = &[
    "a tailored charcoal double-breasted suit with a silk camisole and pointed heels",
    "a black wool power blazer over slim cigarette trousers and patent pumps",
    "a deep espresso pinstripe suit with a crisp open-collar white shirt",
    "an ink-navy longline blazer dress cinched with a thin leather belt",
    "a graphite three-piece suit with a satin lapel and sleek ankle boots",
];

const LUX_BUSINESS_FULLBODY_2: &[&str] = &[
    "a midnight-blue sheath dress under a draped cashmere overcoat",
    "a black turtleneck tucked into high-waisted tailored trousers",
    "a smoke-grey blazer with sculpted shoulders over a silk slip skirt",
    "a dark plaid suit jacket paired with a fitted pencil skirt",
    "an oversized black trench worn open over a monochrome column dress",
];

const LUX_BUSINESS_CLOSEUP_1: &[&str] = &[
    "the sharp peak lapel of a charcoal blazer against a silk blouse",
    "a crisp French cuff closed with a small onyx cufflink",
    "the high collar of a black turtleneck framing the jawline",
    "a thin leather belt cinching a structured blazer dress at the waist",
    "the satin lapel of an evening suit catching a sliver of light",
];

const LUX_BUSINESS_ACCESSORY_1: &[&str] = &[
    "a slim gold-rimmed watch on a black leather strap",
    "small polished onyx stud earrings",
    "a structured black leather portfolio bag",
    "a thin gold collar necklace over a high neckline",
];

const LUX_BUSINESS_ACCESSORY_2: &[&str] = &[
    "narrow rectangular sunglasses held loosely in one hand",
    "a single gold signet ring",
    "a dark silk pocket square barely showing",
    "a pair of black leather gloves folded over the wrist",
];

static LUX_BUSINESS: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", LUX_BUSINESS_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", LUX_BUSINESS_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", LUX_BUSINESS_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", LUX_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", LUX_LOCATION_INDOOR),
        ("ACCESSORY_1", LUX_BUSINESS_ACCESSORY_1),
        ("ACCESSORY_2", LUX_BUSINESS_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
luxury_dark_moody / casual
-------------------------------------------------------------------------- */

const LUX_CASUAL_FULLBODY_1: &[&str] = &[
    "an oversized black cashmere sweater over leather leggings and suede boots",
    "a charcoal knit maxi dress with a draped shawl collar",
    "a slouchy dark denim jacket over a jet-black slip dress",
    "a heavy ribbed turtleneck with relaxed wool trousers",
    "a longline hooded cardigan over a fitted black bodysuit",
];

const LUX_CASUAL_FULLBODY_2: &[&str] = &[
    "a black silk bomber jacket with matte leather joggers",
    "an espresso suede shacket over a cream camisole and dark jeans",
    "a chunky open-knit sweater sliding off one shoulder with slim pants",
    "a quilted midnight puffer vest over a fitted merino base layer",
    "a washed-black oversized tee layered under a long wool coat",
];

const LUX_CASUAL_CLOSEUP_1: &[&str] = &[
    "the rolled cuff of a heavy cashmere sweater against the palm",
    "a slouchy shawl collar framing loose waves of hair",
    "soft ribbed knit texture catching low side light",
    "the worn zipper pull of a silk bomber at the collarbone",
    "a suede lapel brushed against a knit camisole",
];

const LUX_CASUAL_ACCESSORY_1: &[&str] = &[
    "a thin layered gold chain necklace",
    "small gold huggie hoop earrings",
    "a soft black leather bucket bag",
    "a wide-brim wool fedora in charcoal",
];

const LUX_CASUAL_ACCESSORY_2: &[&str] = &[
    "an oversized knit scarf looped once",
    "a minimal cuff bracelet in brushed gold",
    "round tortoiseshell sunglasses pushed into the hair",
    "a slim crossbody phone sling in matte black",
];

static LUX_CASUAL: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", LUX_CASUAL_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", LUX_CASUAL_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", LUX_CASUAL_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", LUX_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", LUX_LOCATION_INDOOR),
        ("ACCESSORY_1", LUX_CASUAL_ACCESSORY_1),
        ("ACCESSORY_2", LUX_CASUAL_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
luxury_dark_moody / trendy
-------------------------------------------------------------------------- */

const LUX_TRENDY_FULLBODY_1: &[&str] = &[
    "a cropped black leather moto jacket over a sheer mesh top and cargo trousers",
    "an asymmetric cutout knit dress with knee-high platform boots",
    "a boxy vinyl blazer over a graphic bralette and wide-leg pants",
    "a deconstructed pinstripe blazer worn as a dress with combat boots",
    "a high-shine puffer cropped at the ribs over low-rise trousers",
];

const LUX_TRENDY_FULLBODY_2: &[&str] = &[
    "a liquid-satin slip dress under an oversized distressed denim jacket",
    "a monochrome black co-ord with exaggerated shoulders",
    "a sheer long-sleeve turtleneck layered under a strappy mini dress",
    "leather flare pants with a sculptural one-shoulder top",
    "a metallic mesh tank tucked into parachute pants",
];

const LUX_TRENDY_CLOSEUP_1: &[&str] = &[
    "the raw hem of a cropped moto jacket against bare skin",
    "layered chains over a sheer mesh collar",
    "a sculptural shoulder seam catching a hard rim light",
    "the liquid sheen of satin gathered at the hip",
    "chunky lug-sole boot laces in tight frame",
];

const LUX_TRENDY_ACCESSORY_1: &[&str] = &[
    "stacked silver chain necklaces of mixed lengths",
    "a micro shoulder bag in patent black",
    "chrome claw hair clips holding a loose updo",
    "industrial silver ear cuffs climbing one ear",
];

const LUX_TRENDY_ACCESSORY_2: &[&str] = &[
    "slim wraparound shield sunglasses",
    "a chunky chain-link bracelet in gunmetal",
    "fishnet gloves cropped at the knuckle",
    "a studded leather belt slung low",
];

static LUX_TRENDY: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", LUX_TRENDY_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", LUX_TRENDY_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", LUX_TRENDY_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", LUX_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", LUX_LOCATION_INDOOR),
        ("ACCESSORY_1", LUX_TRENDY_ACCESSORY_1),
        ("ACCESSORY_2", LUX_TRENDY_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
luxury_dark_moody / timeless
-------------------------------------------------------------------------- */

const LUX_TIMELESS_FULLBODY_1: &[&str] = &[
    "a floor-length black column gown with a square neckline",
    "a cream silk blouse tucked into a high-waisted midnight skirt",
    "a perfectly cut little black dress with three-quarter sleeves",
    "a camel cashmere coat draped over an all-black ensemble",
    "a black velvet wrap dress with a deep V and long sleeves",
];

const LUX_TIMELESS_FULLBODY_2: &[&str] = &[
    "wide-leg black trousers with a tucked ivory knit and heeled loafers",
    "a tailored tuxedo jacket worn over a floor-grazing satin skirt",
    "a boatneck midi dress in deep charcoal with a thin waist belt",
    "a double-faced wool coat in ink over a monochrome turtleneck look",
    "a bias-cut slip skirt with a fine-gauge black sweater",
];

const LUX_TIMELESS_CLOSEUP_1: &[&str] = &[
    "the square neckline of a column gown against bare collarbones",
    "a strand of pearls resting on black velvet",
    "the precise cuff of an ivory silk blouse",
    "a thin waist belt buckled over deep charcoal wool",
    "the drape of a camel coat collar turned up",
];

const LUX_TIMELESS_ACCESSORY_1: &[&str] = &[
    "a single strand of freshwater pearls",
    "small diamond solitaire studs",
    "a structured top-handle bag in black calfskin",
    "a silk scarf knotted at the neck",
];

const LUX_TIMELESS_ACCESSORY_2: &[&str] = &[
    "a slim vintage tank watch on a leather band",
    "black kid gloves to the wrist",
    "a minimal gold bangle",
    "cat-eye sunglasses in matte black",
];

static LUX_TIMELESS: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", LUX_TIMELESS_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", LUX_TIMELESS_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", LUX_TIMELESS_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", LUX_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", LUX_LOCATION_INDOOR),
        ("ACCESSORY_1", LUX_TIMELESS_ACCESSORY_1),
        ("ACCESSORY_2", LUX_TIMELESS_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
urban_editorial / shared locations
-------------------------------------------------------------------------- */

const URBAN_LOCATION_OUTDOOR: &[&str] = &[
    "crossing a painted intersection with long morning shadows",
    "against a weathered brick wall layered with old posters",
    "on a steel pedestrian bridge over commuter tracks",
    "in front of a shuttered storefront with hand-painted signage",
    "leaning on a concrete parking ramp barrier, city haze behind",
    "mid-stride past a row of yellow cabs at a corner",
];

const URBAN_LOCATION_INDOOR: &[&str] = &[
    "inside a raw concrete stairwell lit by a single skylight",
    "in a freight elevator with scuffed steel doors half open",
    "at the window counter of an empty corner diner",
    "in a stripped warehouse space with painter's plastic sheeting",
    "under the fluorescent grid of an underground parking level",
    "beside floor-length windows of a vacant office floor",
];

/* --------------------------------------------------------------------------
urban_editorial / casual
-------------------------------------------------------------------------- */

const URBAN_CASUAL_FULLBODY_1: &[&str] = &[
    "a faded vintage band tee under an open flannel with straight-leg jeans",
    "an oatmeal hoodie layered beneath a cropped canvas chore coat",
    "a boxy white tee with carpenter pants and retro runners",
    "a half-zip fleece over bleached denim and chunky sneakers",
    "a washed-grey sweatshirt knotted over a slip skirt and high-tops",
];

const URBAN_CASUAL_FULLBODY_2: &[&str] = &[
    "a denim-on-denim look broken up with a white ribbed tank",
    "wide cargo pants with a fitted baby tee and a ball cap",
    "an unzipped track jacket over a cotton midi dress",
    "a flannel shirt-dress belted loose over bike shorts",
    "a varsity jacket over a plain tee and relaxed chinos",
];

const URBAN_CASUAL_CLOSEUP_1: &[&str] = &[
    "the frayed collar of a vintage band tee",
    "a canvas chore-coat button mid-fasten",
    "scuffed retro runner laces double-knotted",
    "the brim of a faded ball cap shading the eyes",
    "a flannel cuff rolled twice over the forearm",
];

const URBAN_CASUAL_ACCESSORY_1: &[&str] = &[
    "a nylon crossbody bag worn front",
    "thin wire-frame glasses",
    "a beaded phone strap looped on one wrist",
    "a corduroy bucket hat",
];

const URBAN_CASUAL_ACCESSORY_2: &[&str] = &[
    "a canvas tote slung over one shoulder",
    "a digital watch on a resin band",
    "stacked woven friendship bracelets",
    "wired earbuds draped over the collar",
];

static URBAN_CASUAL: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", URBAN_CASUAL_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", URBAN_CASUAL_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", URBAN_CASUAL_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", URBAN_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", URBAN_LOCATION_INDOOR),
        ("ACCESSORY_1", URBAN_CASUAL_ACCESSORY_1),
        ("ACCESSORY_2", URBAN_CASUAL_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
urban_editorial / trendy
-------------------------------------------------------------------------- */

const URBAN_TRENDY_FULLBODY_1: &[&str] = &[
    "a cropped puffer in glossy black over flared track pants",
    "a deconstructed oversized blazer with a mesh base layer and cargos",
    "a boxy leather shirt-jacket snapped to the chin with stacked jeans",
    "a technical windbreaker half-zipped over a pleated micro skirt",
    "a heavyweight graphic hoodie under a longline trench",
];

const URBAN_TRENDY_FULLBODY_2: &[&str] = &[
    "low-rise parachute pants with a shrunken ringer tee",
    "a panelled moto jacket over wide-leg denim pooling on sneakers",
    "a zip-front knit polo tucked into tailored shorts with loafers",
    "double-waistband trousers and a compression top under an open shirt",
    "a nylon utility vest over a thermal long-sleeve and carpenter jeans",
];

const URBAN_TRENDY_CLOSEUP_1: &[&str] = &[
    "the glossy ripstop texture of a cropped puffer",
    "a carabiner clipped to a belt loop with keys",
    "mesh fabric stretched over a collarbone tattoo",
    "the double waistband stack above a leather belt",
    "a chunky sneaker sole mid-step off a curb",
];

const URBAN_TRENDY_ACCESSORY_1: &[&str] = &[
    "a mini shoulder bag in crinkle nylon",
    "rimless rectangle sunglasses",
    "a chain-link choker over a ribbed collar",
    "a knit balaclava pushed back like a hood",
];

const URBAN_TRENDY_ACCESSORY_2: &[&str] = &[
    "a webbed utility belt off-center",
    "silver rings on three fingers",
    "a carabiner keychain swinging from a belt loop",
    "ankle socks striped over sneaker collars",
];

static URBAN_TRENDY: StyleCatalog = StyleCatalog {
    slots: &[
        ("OUTFIT_FULLBODY_1", URBAN_TRENDY_FULLBODY_1),
        ("OUTFIT_FULLBODY_2", URBAN_TRENDY_FULLBODY_2),
        ("OUTFIT_CLOSEUP_1", URBAN_TRENDY_CLOSEUP_1),
        ("LOCATION_OUTDOOR_1", URBAN_LOCATION_OUTDOOR),
        ("LOCATION_INDOOR_1", URBAN_LOCATION_INDOOR),
        ("ACCESSORY_1", URBAN_TRENDY_ACCESSORY_1),
        ("ACCESSORY_2", URBAN_TRENDY_ACCESSORY_2),
    ],
};

/* --------------------------------------------------------------------------
Partition lookup
-------------------------------------------------------------------------- */

fn style_catalog(vibe: &str, style: FashionStyle) -> Option<&'static StyleCatalog> {
    match (vibe, style) {
        ("luxury_dark_moody", FashionStyle::Business) => Some(&LUX_BUSINESS),
        ("luxury_dark_moody", FashionStyle::Casual) => Some(&LUX_CASUAL),
        ("luxury_dark_moody", FashionStyle::Trendy) => Some(&LUX_TRENDY),
        ("luxury_dark_moody", FashionStyle::Timeless) => Some(&LUX_TIMELESS),
        ("urban_editorial", FashionStyle::Casual) => Some(&URBAN_CASUAL),
        ("urban_editorial", FashionStyle::Trendy) => Some(&URBAN_TRENDY),
        _ => None,
    }
}

/// Look up the ordered variant list for a rotating token.
///
/// Falls back from the exact (vibe, style) partition to the same vibe's
/// default style, then to the global default partition. Returns
/// [`CoreError::CatalogMissing`] only when no step of the chain has a
/// non-empty list for the token's slot.
pub fn variants_for(
    vibe: &str,
    style: FashionStyle,
    token: &PlaceholderToken,
) -> Result<&'static [&'static str], CoreError> {
    let chain = [
        (vibe, style),
        (vibe, DEFAULT_STYLE),
        (DEFAULT_VIBE, DEFAULT_STYLE),
    ];

    for (v, s) in chain {
        if let Some(catalog) = style_catalog(v, s) {
            if let Some(variants) = catalog.slot(&token.name) {
                if !variants.is_empty() {
                    return Ok(variants);
                }
            }
        }
    }

    Err(CoreError::CatalogMissing {
        vibe: vibe.to_string(),
        style,
        token: token.name.clone(),
    })
}

/* --------------------------------------------------------------------------
Static lighting metadata
-------------------------------------------------------------------------- */

const LUX_LIGHTING: &[(&str, &str)] = &[
    (
        "LIGHTING_EVENING",
        "moody low-key evening light, deep shadows with warm tungsten accents",
    ),
    (
        "LIGHTING_GOLDEN_HOUR",
        "last golden-hour rays cutting through dark surroundings, high contrast",
    ),
    (
        "LIGHTING_STUDIO",
        "single hard key light with dramatic falloff into black",
    ),
    (
        "LIGHTING_AMBIENT",
        "dim ambient glow from practical lamps, rich blacks preserved",
    ),
];

const URBAN_LIGHTING: &[(&str, &str)] = &[
    (
        "LIGHTING_EVENING",
        "mixed sodium and neon street light with cool shadow fill",
    ),
    (
        "LIGHTING_GOLDEN_HOUR",
        "low sun flaring between buildings, long crisp shadows",
    ),
    (
        "LIGHTING_STUDIO",
        "flat overcast daylight, soft and documentary",
    ),
    (
        "LIGHTING_AMBIENT",
        "bounced daylight from concrete and glass, neutral and even",
    ),
];

/// Resolve a static lighting token from the per-vibe mood metadata.
///
/// Unknown vibes fall back to the [`DEFAULT_VIBE`] descriptors; an unknown
/// token name resolves to `None` and the injector reports it.
pub fn lighting_descriptor(vibe: &str, token_name: &str) -> Option<&'static str> {
    let table = match vibe {
        "urban_editorial" => URBAN_LIGHTING,
        _ => LUX_LIGHTING,
    };
    table
        .iter()
        .find(|(name, _)| *name == token_name)
        .map(|(_, text)| *text)
}
