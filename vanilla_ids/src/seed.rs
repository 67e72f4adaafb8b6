/// Vanilla IDs — Seed Data
///
/// The closed set of b1.7.3 tiles and items, in registration order.
/// Each row is (legacy handle, legacy display path, current id path).
/// Display paths are the host's translation keys; they feed the legacy
/// alias and nothing else.
///
/// Order matters: later rows for the same handle replace earlier ones.

use crate::domain::Handle;

/// One row of the registration sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedEntry {
    pub handle: Handle,
    pub display_path: Option<&'static str>,
    pub id: &'static str,
}

impl SeedEntry {
    const fn named(handle: Handle, display_path: &'static str, id: &'static str) -> Self {
        Self {
            handle,
            display_path: Some(display_path),
            id,
        }
    }

    /// Objects the host never gave a display path.
    const fn unnamed(handle: Handle, id: &'static str) -> Self {
        Self {
            handle,
            display_path: None,
            id,
        }
    }
}

/// Tiles, handles 1-96.
pub const TILES: &[SeedEntry] = &[
    // The first few ids
    SeedEntry::named(1, "tile.stone", "stone"),
    SeedEntry::named(2, "tile.grass", "grass"),
    SeedEntry::named(3, "tile.dirt", "dirt"),
    SeedEntry::named(4, "tile.stonebrick", "cobblestone"),
    SeedEntry::named(5, "tile.wood", "planks"),
    SeedEntry::named(6, "tile.sapling", "sapling"),
    SeedEntry::named(7, "tile.bedrock", "bedrock"),

    // Fluids
    SeedEntry::named(8, "tile.water", "flowing_water"),
    SeedEntry::named(9, "tile.water", "water"),
    SeedEntry::named(10, "tile.lava", "flowing_lava"),
    SeedEntry::named(11, "tile.lava", "lava"),

    // Everything else, in handle order
    SeedEntry::named(12, "tile.sand", "sand"),
    SeedEntry::named(13, "tile.gravel", "gravel"),
    SeedEntry::named(14, "tile.oreGold", "gold_ore"),
    SeedEntry::named(15, "tile.oreIron", "iron_ore"),
    SeedEntry::named(16, "tile.oreCoal", "coal_ore"),
    SeedEntry::named(17, "tile.log", "log"),
    SeedEntry::named(18, "tile.leaves", "leaves"),
    SeedEntry::named(19, "tile.sponge", "sponge"),
    SeedEntry::named(20, "tile.glass", "glass"),
    SeedEntry::named(21, "tile.oreLapis", "lapis_lazuli_ore"),
    SeedEntry::named(22, "tile.blockLapis", "lapis_lazuli_block"),
    SeedEntry::named(23, "tile.dispenser", "dispenser"),
    SeedEntry::named(24, "tile.sandStone", "sandstone"),
    SeedEntry::named(25, "tile.musicBlock", "noteblock"),
    SeedEntry::named(26, "tile.bed", "bed"),
    SeedEntry::named(27, "tile.goldenRail", "powered_rail"),
    SeedEntry::named(28, "tile.detectorRail", "detector_rail"),
    SeedEntry::named(29, "tile.pistonStickyBase", "sticky_piston"),
    SeedEntry::named(30, "tile.web", "web"),
    SeedEntry::named(31, "tile.tallgrass", "tallgrass"),
    SeedEntry::named(32, "tile.deadbush", "deadbush"),
    SeedEntry::named(33, "tile.pistonBase", "piston"),
    SeedEntry::unnamed(34, "piston_head"),
    SeedEntry::named(35, "tile.cloth", "wool"),
    SeedEntry::unnamed(36, "moving_piston"),
    SeedEntry::named(37, "tile.flower", "dandelion"),
    SeedEntry::named(38, "tile.rose", "rose"),
    SeedEntry::named(39, "tile.mushroom", "brown_mushroom"),
    SeedEntry::named(40, "tile.mushroom", "red_mushroom"),
    SeedEntry::named(41, "tile.blockGold", "block_gold"),
    SeedEntry::named(42, "tile.blockIron", "block_iron"),
    SeedEntry::named(43, "tile.stoneSlab", "double_stone_slab"),
    SeedEntry::named(44, "tile.stoneSlab", "stone_slab"),
    SeedEntry::named(45, "tile.brick", "brick"),
    SeedEntry::named(46, "tile.tnt", "tnt"),
    SeedEntry::named(47, "tile.bookshelf", "bookshelf"),
    SeedEntry::named(48, "tile.stoneMoss", "mossy_cobblestone"),
    SeedEntry::named(49, "tile.obsidian", "obsidian"),
    SeedEntry::named(50, "tile.torch", "torch"),
    SeedEntry::named(51, "tile.fire", "fire"),
    SeedEntry::named(52, "tile.mobSpawner", "mob_spawner"),
    SeedEntry::named(53, "tile.stairsWood", "wooden_stairs"),
    SeedEntry::named(54, "tile.chest", "chest"),
    SeedEntry::named(55, "tile.redstoneDust", "redstone_dust"),
    SeedEntry::named(56, "tile.oreDiamond", "diamond_ore"),
    SeedEntry::named(57, "tile.blockDiamond", "diamond_block"),
    SeedEntry::named(58, "tile.workbench", "workbench"),
    SeedEntry::named(59, "tile.crops", "crops"),
    SeedEntry::named(60, "tile.farmland", "farmland"),
    SeedEntry::named(61, "tile.furnace", "furnace"),
    SeedEntry::named(62, "tile.furnace", "lit_furnace"),
    SeedEntry::named(63, "tile.sign", "standing_sign"),
    SeedEntry::named(64, "tile.doorWood", "wooden_door"),
    SeedEntry::named(65, "tile.ladder", "ladder"),
    SeedEntry::named(66, "tile.rail", "rail"),
    SeedEntry::named(67, "tile.stairsStone", "stone_stairs"),
    SeedEntry::named(68, "tile.sign", "wall_sign"),
    SeedEntry::named(69, "tile.lever", "lever"),
    SeedEntry::named(70, "tile.pressurePlate", "stone_pressure_plate"),
    SeedEntry::named(71, "tile.doorIron", "iron_door"),
    SeedEntry::named(72, "tile.pressurePlate", "wooden_pressure_plate"),
    SeedEntry::named(73, "tile.oreRedstone", "redstone_ore"),
    SeedEntry::named(74, "tile.oreRedstone", "lit_redstone_ore"),
    SeedEntry::named(75, "tile.notGate", "redstone_torch"),
    SeedEntry::named(76, "tile.notGate", "lit_redstone_torch"),
    SeedEntry::named(77, "tile.button", "button"),
    SeedEntry::named(78, "tile.snow", "snow"),
    SeedEntry::named(79, "tile.ice", "ice"),
    SeedEntry::named(80, "tile.snow", "snow_block"),
    SeedEntry::named(81, "tile.cactus", "cactus"),
    SeedEntry::named(82, "tile.clay", "clay"),
    SeedEntry::named(83, "tile.reeds", "reeds"),
    SeedEntry::named(84, "tile.jukebox", "jukebox"),
    SeedEntry::named(85, "tile.fence", "fence"),
    SeedEntry::named(86, "tile.pumpkin", "pumpkin"),
    SeedEntry::named(87, "tile.hellrock", "netherrack"),
    SeedEntry::named(88, "tile.hellsand", "soul_sand"),
    SeedEntry::named(89, "tile.lightgem", "glowstone"),
    SeedEntry::named(90, "tile.portal", "portal"),
    SeedEntry::named(91, "tile.litpumpkin", "lit_pumpkin"),
    SeedEntry::named(92, "tile.cake", "cake"),
    SeedEntry::named(93, "tile.diode", "redstone_repeater"),
    SeedEntry::named(94, "tile.diode", "lit_redstone_repeater"),
    SeedEntry::named(95, "tile.lockedchest", "locked_chest"),
    SeedEntry::named(96, "tile.trapdoor", "trapdoor"),
];

/// Items, handles 256-359 plus the two records.
pub const ITEMS: &[SeedEntry] = &[
    // Tools and weapons
    SeedEntry::named(256, "item.shovelIron", "iron_shovel"),
    SeedEntry::named(257, "item.pickaxeIron", "iron_pickaxe"),
    SeedEntry::named(258, "item.hatchetIron", "iron_axe"),
    SeedEntry::named(259, "item.flintAndSteel", "flint_and_steel"),
    SeedEntry::named(260, "item.apple", "apple"),
    SeedEntry::named(261, "item.bow", "bow"),
    SeedEntry::named(262, "item.arrow", "arrow"),
    SeedEntry::named(263, "item.coal", "coal"),
    SeedEntry::named(264, "item.emerald", "diamond"),
    SeedEntry::named(265, "item.ingotIron", "iron_ingot"),
    SeedEntry::named(266, "item.ingotGold", "gold_ingot"),
    SeedEntry::named(267, "item.swordIron", "iron_sword"),
    SeedEntry::named(268, "item.swordWood", "wooden_sword"),
    SeedEntry::named(269, "item.shovelWood", "wooden_shovel"),
    SeedEntry::named(270, "item.pickaxeWood", "wooden_pickaxe"),
    SeedEntry::named(271, "item.hatchetWood", "wooden_hatchet"),
    SeedEntry::named(272, "item.swordStone", "stone_sword"),
    SeedEntry::named(273, "item.shovelStone", "stone_shovel"),
    SeedEntry::named(274, "item.pickaxeStone", "stone_pickaxe"),
    SeedEntry::named(275, "item.hatchetStone", "stone_hatchet"),
    SeedEntry::named(276, "item.swordDiamond", "sword_diamond"),
    SeedEntry::named(277, "item.shovelDiamond", "shovel_diamond"),
    SeedEntry::named(278, "item.pickaxeDiamond", "diamond_pickaxe"),
    SeedEntry::named(279, "item.hatchetDiamond", "diamond_hatchet"),
    SeedEntry::named(280, "item.stick", "stick"),
    SeedEntry::named(281, "item.bowl", "bowl"),
    SeedEntry::named(282, "item.mushroomStew", "mushroom_stew"),
    SeedEntry::named(283, "item.swordGold", "gold_sword"),
    SeedEntry::named(284, "item.shovelGold", "gold_shovel"),
    SeedEntry::named(285, "item.pickaxeGold", "gold_pickaxe"),
    SeedEntry::named(286, "item.hatchetGold", "gold_hatchet"),
    SeedEntry::named(287, "item.string", "string"),
    SeedEntry::named(288, "item.feather", "feather"),
    SeedEntry::named(289, "item.sulphur", "sulphur"),
    SeedEntry::named(290, "item.hoeWood", "wooden_hoe"),
    SeedEntry::named(291, "item.hoeStone", "stone_hoe"),
    SeedEntry::named(292, "item.hoeIron", "iron_hoe"),
    SeedEntry::named(293, "item.hoeDiamond", "diamond_hoe"),
    SeedEntry::named(294, "item.hoeGold", "gold_hoe"),
    SeedEntry::named(295, "item.seeds", "seeds"),
    SeedEntry::named(296, "item.wheat", "wheat"),
    SeedEntry::named(297, "item.bread", "bread"),

    // Armour
    SeedEntry::named(298, "item.helmetCloth", "cloth_helmet"),
    SeedEntry::named(299, "item.chestplateCloth", "cloth_chestplate"),
    SeedEntry::named(300, "item.leggingsCloth", "cloth_leggings"),
    SeedEntry::named(301, "item.bootsCloth", "cloth_boots"),
    SeedEntry::named(302, "item.helmetChain", "chain_helmet"),
    SeedEntry::named(303, "item.chestplateChain", "chain_chestplate"),
    SeedEntry::named(304, "item.leggingsChain", "chain_leggings"),
    SeedEntry::named(305, "item.bootsChain", "chain_boots"),
    SeedEntry::named(306, "item.helmetIron", "iron_helmet"),
    SeedEntry::named(307, "item.chestplateIron", "iron_chestplate"),
    SeedEntry::named(308, "item.leggingsIron", "iron_leggings"),
    SeedEntry::named(309, "item.bootsIron", "iron_boots"),
    SeedEntry::named(310, "item.helmetDiamond", "diamond_helmet"),
    SeedEntry::named(311, "item.chestplateDiamond", "diamond_chestplate"),
    SeedEntry::named(312, "item.leggingsDiamond", "diamond_leggings"),
    SeedEntry::named(313, "item.bootsDiamond", "diamond_boots"),
    SeedEntry::named(314, "item.helmetGold", "gold_helmet"),
    SeedEntry::named(315, "item.chestplateGold", "gold_chestplate"),
    SeedEntry::named(316, "item.leggingsGold", "gold_leggings"),
    SeedEntry::named(317, "item.bootsGold", "gold_boots"),

    // Everything else
    SeedEntry::named(318, "item.flint", "flint"),
    SeedEntry::named(319, "item.porkchopRaw", "raw_porkchop"),
    SeedEntry::named(320, "item.porkchopCooked", "cooked_porkchop"),
    SeedEntry::named(321, "item.painting", "painting"),
    SeedEntry::named(322, "item.appleGold", "gold_apple"),
    SeedEntry::named(323, "item.sign", "sign"),
    SeedEntry::named(324, "item.doorWood", "wooden_door"),
    SeedEntry::named(325, "item.bucket", "bucket"),
    SeedEntry::named(326, "item.bucketWater", "water_bucket"),
    SeedEntry::named(327, "item.bucketLava", "lava_bucket"),
    SeedEntry::named(328, "item.minecart", "minecart"),
    SeedEntry::named(329, "item.saddle", "saddle"),
    SeedEntry::named(330, "item.doorIron", "iron_door"),
    SeedEntry::named(331, "item.redstone", "redstone"),
    SeedEntry::named(332, "item.snowball", "snowball"),
    SeedEntry::named(333, "item.boat", "boat"),
    SeedEntry::named(334, "item.leather", "leather"),
    SeedEntry::named(335, "item.milk", "milk"),
    SeedEntry::named(336, "item.brick", "brick"),
    SeedEntry::named(337, "item.clay", "clay"),
    SeedEntry::named(338, "item.reeds", "reeds"),
    SeedEntry::named(339, "item.paper", "paper"),
    SeedEntry::named(340, "item.book", "book"),
    SeedEntry::named(341, "item.slimeball", "slimeball"),
    SeedEntry::named(342, "item.minecartChest", "minecart_chest"),
    SeedEntry::named(343, "item.minecartFurnace", "minecart_furnace"),
    SeedEntry::named(344, "item.egg", "egg"),
    SeedEntry::named(345, "item.compass", "compass"),
    SeedEntry::named(346, "item.fishingRod", "fishing_rod"),
    SeedEntry::named(347, "item.clock", "clock"),
    SeedEntry::named(348, "item.yellowDust", "glowstone_dust"),
    SeedEntry::named(349, "item.fishRaw", "raw_fish"),
    SeedEntry::named(350, "item.fishCooked", "cooked_fish"),
    SeedEntry::named(351, "item.dyePowder", "dye_powder"),
    SeedEntry::named(352, "item.bone", "bone"),
    SeedEntry::named(353, "item.sugar", "sugar"),
    SeedEntry::named(354, "item.cake", "cake"),
    SeedEntry::named(355, "item.bed", "bed"),
    SeedEntry::named(356, "item.diode", "redstone_repeater"),
    SeedEntry::named(357, "item.cookie", "cookie"),
    SeedEntry::named(358, "item.map", "map"),
    SeedEntry::named(359, "item.shears", "shears"),

    // Records live far above the other items
    SeedEntry::named(2256, "item.record", "record_13"),
    SeedEntry::named(2257, "item.record", "record_cat"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_seed_sizes() {
        assert_eq!(TILES.len(), 96);
        assert_eq!(ITEMS.len(), 106);
    }

    #[test]
    fn test_seed_handles_are_unique() {
        let tiles: BTreeSet<Handle> = TILES.iter().map(|e| e.handle).collect();
        let items: BTreeSet<Handle> = ITEMS.iter().map(|e| e.handle).collect();
        assert_eq!(tiles.len(), TILES.len());
        assert_eq!(items.len(), ITEMS.len());
    }

    #[test]
    fn test_seed_display_paths_carry_category_prefix() {
        for e in TILES {
            if let Some(path) = e.display_path {
                assert!(path.starts_with("tile."), "{:?}", e);
            }
        }
        for e in ITEMS {
            let path = e.display_path.expect("every vanilla item has a display path");
            assert!(path.starts_with("item."), "{:?}", e);
        }
    }

    #[test]
    fn test_only_piston_internals_lack_display_paths() {
        let unnamed: Vec<Handle> = TILES
            .iter()
            .filter(|e| e.display_path.is_none())
            .map(|e| e.handle)
            .collect();
        assert_eq!(unnamed, vec![34, 36]);
    }
}
