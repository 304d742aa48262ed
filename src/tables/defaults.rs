use std::collections::{BTreeMap, HashMap};

const ITEM_NAMES: &[(&str, &str)] = &[
    ("SerpentskinArmor", "Serpentskin Armor"),
    ("StuddedLeather", "Studded Leather"),
    ("ChainMail", "Chain Mail"),
    ("SplintMail", "Splint Mail"),
    ("PlateMail", "Plate Mail"),
    ("FieldPlate", "Field Plate"),
    ("GothicPlate", "Gothic Plate"),
    ("FullPlateMail", "Full Plate Mail"),
    ("LeatherArmor", "Leather Armor"),
    ("HardLeatherArmor", "Hard Leather Armor"),
    ("RingMail", "Ring Mail"),
    ("ScaleMail", "Scale Mail"),
    ("BreastPlate", "Breast Plate"),
    ("LightPlate", "Light Plate"),
    ("AncientArmor", "Ancient Armor"),
    ("WarHat", "War Hat"),
    ("WingedHelm", "Winged Helm"),
    ("GrandCrown", "Grand Crown"),
    ("DeathMask", "Death Mask"),
    ("GhostArmor", "Ghost Armor"),
    ("DemonhideArmor", "Demonhide Armor"),
    ("TrellisedArmor", "Trellised Armor"),
    ("LinkedMail", "Linked Mail"),
    ("TigulatedMail", "Tigulated Mail"),
    ("MeshArmor", "Mesh Armor"),
    ("CuirBouilli", "Cuir Bouilli"),
    ("GothicBow", "Gothic Bow"),
    ("CompositeBow", "Composite Bow"),
    ("BattleBow", "Battle Bow"),
    ("WarBow", "War Bow"),
    ("LongBow", "Long Bow"),
    ("ShortBow", "Short Bow"),
    ("HuntersBow", "Hunter's Bow"),
    ("LongSword", "Long Sword"),
    ("BroadSword", "Broad Sword"),
    ("CrystalSword", "Crystal Sword"),
    ("TwoHandedSword", "Two-Handed Sword"),
    ("WarSword", "War Sword"),
    ("BastardSword", "Bastard Sword"),
    ("HandAxe", "Hand Axe"),
    ("BroadAxe", "Broad Axe"),
    ("BattleAxe", "Battle Axe"),
    ("LargeAxe", "Large Axe"),
    ("GreatAxe", "Great Axe"),
    ("GiantAxe", "Giant Axe"),
    ("WalkingStick", "Walking Stick"),
    ("GnarledStaff", "Gnarled Staff"),
    ("BattleStaff", "Battle Staff"),
    ("WarStaff", "War Staff"),
    ("LongStaff", "Long Staff"),
    ("QuarterStaff", "Quarter Staff"),
    ("LeatherGloves", "Leather Gloves"),
    ("HeavyGloves", "Heavy Gloves"),
    ("ChainGloves", "Chain Gloves"),
    ("LightGauntlets", "Light Gauntlets"),
    ("LeatherBoots", "Leather Boots"),
    ("HeavyBoots", "Heavy Boots"),
    ("ChainBoots", "Chain Boots"),
    ("LightPlatedBoots", "Light Plated Boots"),
    ("BeltPouch", "Belt Pouch"),
    ("SashBelt", "Sash Belt"),
    ("LightBelt", "Light Belt"),
    ("HeavyBelt", "Heavy Belt"),
    ("PlatedBelt", "Plated Belt"),
    ("SmallShield", "Small Shield"),
    ("LargeShield", "Large Shield"),
    ("KiteShield", "Kite Shield"),
    ("TowerShield", "Tower Shield"),
    ("GothicShield", "Gothic Shield"),
    ("BoneShield", "Bone Shield"),
    ("SpikedShield", "Spiked Shield"),
    ("BladeTalons", "Blade Talons"),
    ("ScissorsSuwayyah", "Scissors Suwayyah"),
    ("Wristblade", "Wrist Blade"),
    ("HandScythe", "Hand Scythe"),
    ("GreaterTalons", "Greater Talons"),
    ("GreaterClaws", "Greater Claws"),
    ("HealingPotion", "Healing Potion"),
    ("ManaPotion", "Mana Potion"),
    ("RejuvenationPotion", "Rejuvenation Potion"),
    ("FullRejuvenationPotion", "Full Rejuvenation Potion"),
    ("StaminaPotion", "Stamina Potion"),
    ("AntidotePotion", "Antidote Potion"),
    ("ThawingPotion", "Thawing Potion"),
];

const AREA_NAMES: &[(u32, &str)] = &[
    (1, "Rogue Encampment"),
    (2, "Blood Moor"),
    (3, "Cold Plains"),
    (4, "Stony Field"),
    (5, "Dark Wood"),
    (6, "Black Marsh"),
    (27, "Jail Level 1"),
    (28, "Jail Level 2"),
    (29, "Jail Level 3"),
    (30, "Inner Cloister"),
    (31, "Cathedral"),
    (32, "Catacombs Level 1"),
    (33, "Catacombs Level 2"),
    (34, "Catacombs Level 3"),
    (35, "Catacombs Level 4"),
    (40, "Lut Gholein"),
    (54, "Arcane Sanctuary"),
    (55, "Canyon of the Magi"),
    (56, "Tal Rasha's Tomb"),
    (73, "Tal Rasha's Chamber"),
    (75, "Kurast Docks"),
    (76, "Spider Forest"),
    (77, "Great Marsh"),
    (78, "Flayer Jungle"),
    (79, "Lower Kurast"),
    (80, "Kurast Bazaar"),
    (81, "Upper Kurast"),
    (82, "Kurast Causeway"),
    (83, "Travincal"),
    (84, "Durance of Hate Level 1"),
    (85, "Durance of Hate Level 2"),
    (86, "Durance of Hate Level 3"),
    (103, "The Pandemonium Fortress"),
    (104, "Outer Steppes"),
    (105, "Plains of Despair"),
    (106, "City of the Damned"),
    (107, "River of Flame"),
    (108, "Chaos Sanctuary"),
    (109, "Harrogath"),
    (110, "Bloody Foothills"),
    (111, "Frigid Highlands"),
    (112, "Arreat Plateau"),
    (113, "Crystalline Passage"),
    (114, "Frozen River"),
    (115, "Glacial Trail"),
    (116, "Drifter Cavern"),
    (117, "Frozen Tundra"),
    (118, "The Ancients' Way"),
    (119, "Icy Cellar"),
    (120, "Arreat Summit"),
    (121, "Nihlathak's Temple"),
    (122, "Halls of Anguish"),
    (123, "Halls of Pain"),
    (124, "Halls of Vaught"),
    (131, "Worldstone Keep Level 1"),
    (132, "Worldstone Keep Level 2"),
    (133, "Worldstone Keep Level 3"),
    (134, "Throne of Destruction"),
    (135, "The Worldstone Chamber"),
];

const CLASS_NAMES: &[(u8, &str)] = &[
    (0, "Amazon"),
    (1, "Sorceress"),
    (2, "Necromancer"),
    (3, "Paladin"),
    (4, "Barbarian"),
    (5, "Druid"),
    (6, "Assassin"),
];

/// Total experience needed to reach each level, starting at level 1
const LEVEL_XP: [u64; 99] = [
    0, 500, 1_500, 3_750, 7_875, 14_175, 22_680, 32_886, 44_396, 57_715,
    72_144, 90_180, 112_725, 140_906, 176_132, 220_165, 275_207, 344_008, 430_010, 537_513,
    671_891, 839_864, 1_049_830, 1_312_287, 1_640_359, 2_050_449, 2_563_061, 3_203_826, 3_902_260, 4_663_553,
    5_493_363, 6_397_855, 7_383_752, 8_458_379, 9_629_723, 10_906_488, 12_298_162, 13_815_086, 15_468_534, 17_270_791,
    19_235_252, 21_376_515, 23_710_491, 26_254_525, 29_027_522, 32_050_088, 35_344_686, 38_935_798, 42_850_109, 47_116_709,
    51_767_302, 56_836_449, 62_361_819, 68_384_473, 74_949_165, 82_104_680, 89_904_191, 98_405_658, 107_672_256, 117_772_849,
    128_782_495, 140_783_010, 153_863_570, 168_121_381, 183_662_396, 200_602_101, 219_066_380, 239_192_444, 261_129_853, 285_041_630,
    311_105_466, 339_515_048, 370_481_492, 404_234_916, 441_026_148, 481_128_591, 524_840_254, 572_485_967, 624_419_793, 681_027_665,
    742_730_244, 809_986_056, 883_294_891, 963_201_521, 1_050_299_747, 1_145_236_814, 1_248_718_217, 1_361_512_946, 1_484_459_201, 1_618_470_619,
    1_764_543_065, 1_923_762_030, 2_097_310_703, 2_286_478_756, 2_492_671_933, 2_717_422_497, 2_962_400_612, 3_229_426_756, 3_520_485_254,
];

pub(super) fn item_names() -> HashMap<String, String> {
    ITEM_NAMES
        .iter()
        .map(|(raw, display)| (raw.to_string(), display.to_string()))
        .collect()
}

pub(super) fn area_names() -> HashMap<u32, String> {
    AREA_NAMES
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect()
}

pub(super) fn class_names() -> HashMap<u8, String> {
    CLASS_NAMES
        .iter()
        .map(|(id, name)| (*id, name.to_string()))
        .collect()
}

pub(super) fn level_xp() -> BTreeMap<u32, u64> {
    LEVEL_XP
        .iter()
        .enumerate()
        .map(|(i, xp)| (i as u32 + 1, *xp))
        .collect()
}
