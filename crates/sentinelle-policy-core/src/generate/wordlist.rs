//! Built-in passphrase wordlist.
//!
//! 256 short English words (8.0 bits per word), alphabetically sorted.
//! Compiled in as a const table; callers needing a larger space can layer
//! a full diceware list on top, the entropy formula only depends on the
//! list length.

/// Number of words in the built-in wordlist.
pub const WORDLIST_SIZE: usize = 256;

static WORDS: [&str; WORDLIST_SIZE] = [
    "acorn", "amber", "anchor", "anvil", "apple", "apricot", "arrow", "aspen", "atlas", "auburn",
    "autumn", "avocado", "axiom", "azure", "badge", "bagel", "bamboo", "banjo", "barley", "basil",
    "beacon", "beaver", "berry", "birch", "bishop", "bison", "blanket", "blossom", "bonfire",
    "border", "boulder", "breeze", "bridge", "bronze", "brook", "bucket", "butter", "cabin",
    "cactus", "camera", "canoe", "canyon", "carbon", "cargo", "carpet", "castle", "cedar", "cello",
    "chalk", "cherry", "chisel", "cinder", "cipher", "citrus", "clover", "cobalt", "cocoa",
    "comet", "compass", "copper", "coral", "cotton", "cougar", "cradle", "crater", "cricket",
    "crystal", "cypress", "daisy", "dolphin", "domino", "donkey", "drift", "eagle", "easel",
    "echo", "eclipse", "elbow", "elder", "ember", "emerald", "engine", "falcon", "feather",
    "fennel", "ferry", "fiddle", "finch", "fjord", "flint", "fossil", "garden", "garlic",
    "gazebo", "gecko", "ginger", "glacier", "goblet", "granite", "grape", "gravel", "grotto",
    "hammock", "harbor", "hazel", "heron", "hickory", "hollow", "honey", "horizon", "hornet",
    "husk", "iceberg", "indigo", "iris", "ivory", "jackal", "jasmine", "jasper", "juniper",
    "kayak", "kettle", "kiwi", "ladder", "lagoon", "lantern", "larch", "lava", "lemon", "lentil",
    "lilac", "lily", "lobster", "locket", "lotus", "lumber", "lynx", "magnet", "mango", "maple",
    "marble", "meadow", "melon", "mesa", "mineral", "mint", "mirror", "morsel", "mosaic", "moss",
    "mulberry", "mustard", "nebula", "nectar", "nickel", "nutmeg", "oasis", "ocean", "olive",
    "onyx", "opal", "orchard", "orchid", "osprey", "otter", "owl", "oyster", "paddle", "pagoda",
    "palm", "panther", "papaya", "parcel", "parsley", "peach", "pebble", "pecan", "pelican",
    "pepper", "pigeon", "pillow", "pine", "pistachio", "planet", "plum", "pocket", "pollen",
    "pond", "poplar", "poppy", "prairie", "prism", "pumpkin", "quarry", "quartz", "quill",
    "rabbit", "raccoon", "radish", "raft", "raisin", "raven", "reef", "ribbon", "ridge", "river",
    "robin", "rocket", "rosemary", "rudder", "saddle", "saffron", "sage", "salmon", "sandal",
    "sapphire", "satchel", "scarlet", "shell", "sierra", "silver", "sparrow", "spruce", "squash",
    "stone", "summit", "sunflower", "swallow", "sycamore", "tango", "temple", "thistle",
    "thunder", "tiger", "timber", "topaz", "torch", "trellis", "trout", "tulip", "tundra",
    "turnip", "turtle", "valley", "vanilla", "velvet", "violet", "walnut", "walrus", "wheat",
    "willow", "winter", "wolf", "yarrow", "zephyr", "zinnia",
];

/// Returns the built-in wordlist.
#[must_use]
pub fn builtin() -> &'static [&'static str] {
    &WORDS
}
