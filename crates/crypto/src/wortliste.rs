//! Gemeinsame Wortliste fuer Transfer-Codes
//!
//! Sender und Empfaenger muessen exakt dieselbe Liste verwenden, sonst
//! lehnt `parse_code` gueltig aussehende Codes ab. Die Liste ist sortiert,
//! damit die Pruefung per Binaersuche laufen kann.

/// 512 Woerter, nur `[a-z]`, sortiert, ohne Duplikate
pub const WORTLISTE: [&str; 512] = [
    "acid", "acorn", "actor", "adobe", "agent", "alarm", "album", "alert", "alien", "alpha",
    "amber", "angle", "ankle", "anvil", "apple", "arch", "arena", "argue", "ark", "armor",
    "arrow", "aspen", "atlas", "atom", "audio", "autumn", "avenue", "award", "axis", "bacon",
    "badge", "baker", "bamboo", "banjo", "barn", "baron", "basil", "basin", "beach", "bead",
    "beam", "bean", "bear", "beaver", "bell", "belt", "berry", "beta", "bike", "birch",
    "bison", "blade", "blanket", "blaze", "blend", "bloom", "blue", "board", "boat", "bolt",
    "bonus", "book", "border", "bottle", "boulder", "bowl", "box", "brave", "bread", "breeze",
    "bridge", "brook", "broom", "brush", "bubble", "bucket", "buffalo", "bundle", "burrow",
    "butter", "button", "cabin", "cable", "cactus", "camel", "canal", "candle", "canoe",
    "canyon", "cape", "captain", "carbon", "carpet", "carrot", "castle", "cedar", "cellar",
    "chalk", "channel", "chapel", "chess", "chief", "chimney", "chorus", "cider", "cinema",
    "circle", "clay", "cliff", "clock", "cloud", "clover", "coast", "cobalt", "cocoa",
    "compass", "copper", "coral", "cotton", "cougar", "crane", "crater", "creek", "cricket",
    "crown", "crystal", "cube", "cupboard", "curtain", "cushion", "cymbal", "dagger", "daisy",
    "dance", "dawn", "decade", "deer", "denim", "desert", "diamond", "diesel", "dinner",
    "dolphin", "domino", "dove", "dragon", "drift", "drum", "dune", "dust", "eagle", "earth",
    "echo", "eclipse", "elbow", "elder", "ember", "emerald", "engine", "equal", "ermine",
    "estate", "ether", "fable", "falcon", "fancy", "farm", "fence", "fern", "ferry",
    "festival", "fiber", "fiddle", "field", "finch", "fjord", "flame", "flask", "fleet",
    "flint", "flower", "flute", "forest", "fossil", "fountain", "fox", "frame", "fresco",
    "frost", "fudge", "furnace", "gable", "galaxy", "garden", "garlic", "garnet", "gate",
    "gecko", "gem", "geyser", "ginger", "glacier", "glade", "globe", "goat", "gold", "gondola",
    "gopher", "gorge", "grain", "granite", "grape", "griffin", "grove", "guitar", "gull",
    "gusto", "habit", "hammer", "harp", "harvest", "hatch", "hawk", "hazel", "heart", "hedge",
    "helmet", "hickory", "hill", "hinge", "hippo", "hobby", "honey", "hood", "hornet", "horse",
    "hotel", "hound", "hull", "husky", "ice", "icon", "image", "impala", "index", "ink",
    "inlet", "iris", "iron", "ivory", "ivy", "jacket", "jade", "jaguar", "jam", "jasper",
    "jazz", "jetty", "jewel", "jigsaw", "jockey", "journey", "judge", "juice", "juniper",
    "kayak", "kelp", "kernel", "kettle", "key", "kiln", "kitten", "kiwi", "knot", "koala",
    "label", "ladder", "lagoon", "lake", "lantern", "larch", "lark", "laser", "lava", "lawn",
    "leaf", "lemon", "lens", "lily", "lime", "linen", "lion", "lizard", "llama", "locket",
    "lodge", "lotus", "lunar", "lynx", "lyric", "magnet", "manor", "maple", "marble", "market",
    "marsh", "mask", "meadow", "melon", "meteor", "mica", "mill", "mint", "mirror", "mist",
    "mitten", "module", "monkey", "moon", "moose", "mosaic", "moss", "motor", "mountain",
    "museum", "music", "mustard", "napkin", "nectar", "needle", "nest", "night", "noble",
    "noodle", "north", "nova", "nugget", "nutmeg", "oak", "ocean", "octave", "olive", "omega",
    "onion", "opal", "orbit", "organ", "otter", "oven", "owl", "oxide", "oyster", "paddle",
    "palace", "panda", "panther", "paper", "parade", "parrot", "pasta", "peach", "pearl",
    "pebble", "pelican", "pencil", "pepper", "piano", "pickle", "pigeon", "pilot", "pine",
    "pirate", "planet", "plaza", "plum", "pocket", "polar", "pond", "poppy", "portal",
    "potato", "prairie", "prism", "puffin", "pumpkin", "puzzle", "pyramid", "quail", "quarry",
    "quartz", "queen", "quill", "quilt", "quiver", "rabbit", "raccoon", "radar", "radio",
    "rain", "raisin", "ranch", "raven", "razor", "reef", "relic", "ribbon", "river", "robin",
    "rocket", "rodeo", "rose", "ruby", "rudder", "saddle", "saffron", "sail", "salmon", "salt",
    "sand", "satin", "saturn", "scout", "season", "seed", "shadow", "shell", "shelter",
    "shield", "silver", "siren", "sketch", "sled", "slope", "snow", "socket", "sonar",
    "sphere", "spice", "spider", "spiral", "spruce", "squid", "stable", "stone", "storm",
    "stream", "sugar", "summit", "sun", "swan", "table", "talon", "tango", "teapot", "temple",
    "tiger", "timber", "toast", "topaz", "torch", "tower", "trail", "tram", "tree", "trumpet",
    "tulip", "tunnel", "turtle", "twig", "umbrella", "unicorn", "union", "unit", "valley",
    "vapor", "vault", "velvet", "venom", "vessel", "villa", "vine", "violin", "viper", "visor",
    "vivid", "volcano", "voyage", "wagon", "walrus", "wand", "water", "wave", "wheat",
    "whistle", "willow", "window", "wizard", "wolf", "wombat", "wool", "yacht", "yak", "yarn",
    "yodel", "yolk", "zebra", "zenith", "zephyr", "zinc", "zipper", "zone", "zoo",
];

/// Sucht ein Wort und gibt den Listeneintrag zurueck
pub fn nachschlagen(wort: &str) -> Option<&'static str> {
    WORTLISTE
        .binary_search_by(|w| (*w).cmp(wort))
        .ok()
        .map(|i| WORTLISTE[i])
}
