// ==========================================
// 物品数据导入工具 - 物品记录
// ==========================================
// 对齐: items 表（每个受支持属性一列，主键 id）
// 生命周期: 每行输入临时构造，查询/插入后丢弃
// ==========================================

use crate::domain::field::{FieldMapping, FieldValue};
use chrono::NaiveDateTime;
use std::collections::HashMap;

define_item_fields! {
    /// 单个物品的扁平记录
    ///
    /// 未映射或不支持的列保持类型零值。
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ItemRecord;
    pub static ITEM_FIELDS;

    // ===== 落库属性 =====
    id: i64 = "id" => "id";
    name: String = "name" => "Name";
    aagi: i64 = "aagi" => "aagi";
    ac: i64 = "ac" => "ac";
    accuracy: i64 = "accuracy" => "accuracy";
    acha: i64 = "acha" => "acha";
    adex: i64 = "adex" => "adex";
    aint: i64 = "aint" => "aint";
    artifactflag: i64 = "artifactflag" => "artifactflag";
    asta: i64 = "asta" => "asta";
    astr: i64 = "astr" => "astr";
    attack: i64 = "attack" => "attack";
    attuneable: i64 = "attunable" => "attuneable";
    augdistiller: i64 = "augdistiller" => "augdistiller";
    augrestrict: i64 = "augrestrict" => "augrestrict";
    augslot1type: i64 = "augslot1type" => "augslot1type";
    augslot1unk2: i64 = "augslot1unk" => "augslot1unk2";
    augslot1visible: i64 = "augslot1visible" => "augslot1visible";
    augslot2type: i64 = "augslot2type" => "augslot2type";
    augslot2unk2: i64 = "augslot2unk" => "augslot2unk2";
    augslot2visible: i64 = "augslot2visible" => "augslot2visible";
    augslot3type: i64 = "augslot3type" => "augslot3type";
    augslot3unk2: i64 = "augslot3unk" => "augslot3unk2";
    augslot3visible: i64 = "augslot3visible" => "augslot3visible";
    augslot4type: i64 = "augslot4type" => "augslot4type";
    augslot4unk2: i64 = "augslot4unk" => "augslot4unk2";
    augslot4visible: i64 = "augslot4visible" => "augslot4visible";
    augslot5type: i64 = "augslot5type" => "augslot5type";
    augslot5unk2: i64 = "augslot5unk" => "augslot5unk2";
    augslot5visible: i64 = "augslot5visible" => "augslot5visible";
    augslot6type: i64 = "augslot6type" => "augslot6type";
    augslot6unk2: i64 = "augslot6unk" => "augslot6unk2";
    augslot6visible: i64 = "augslot6visible" => "augslot6visible";
    augtype: i64 = "augtype" => "augtype";
    avoidance: i64 = "avoidance" => "avoidance";
    awis: i64 = "awis" => "awis";
    backstabdmg: i64 = "backstabdmg" => "backstabdmg";
    bagsize: i64 = "bagsize" => "bagsize";
    bagslots: i64 = "bagslots" => "bagslots";
    bagtype: i64 = "bagtype" => "bagtype";
    bagwr: i64 = "bagwr" => "bagwr";
    banedmgamt: i64 = "banedmgamt" => "banedmgamt";
    banedmgbody: i64 = "banedmgbody" => "banedmgbody";
    banedmgrace: i64 = "banedmgrace" => "banedmgrace";
    banedmgraceamt: i64 = "banedmgraceamt" => "banedmgraceamt";
    bardeffect: i64 = "bardeffect" => "bardeffect";
    bardeffecttype: i64 = "bardeffecttype" => "bardeffecttype";
    bardlevel: i64 = "bardlevel" => "bardlevel";
    bardlevel2: i64 = "bardlevel2" => "bardlevel2";
    bardname: String = "bardname" => "bardname";
    bardtype: i64 = "bardtype" => "bardtype";
    bardunk1: i64 = "bardunk1" => "bardunk1";
    bardunk2: i64 = "bardunk2" => "bardunk2";
    bardunk3: i64 = "bardunk3" => "bardunk3";
    bardunk4: i64 = "bardunk4" => "bardunk4";
    bardunk5: i64 = "bardunk5" => "bardunk5";
    bardunk7: i64 = "bardunk7" => "bardunk7";
    bardvalue: i64 = "bardvalue" => "bardvalue";
    benefitflag: i64 = "benefitflag" => "benefitflag";
    book: i64 = "booklang" => "book";
    booktype: i64 = "booktype" => "booktype";
    casttime: i64 = "casttime" => "casttime";
    casttime2: i64 = "casttime_" => "casttime_";
    charmfile: String = "charmfile" => "charmfile";
    charmfileid: String = "charmfileid" => "charmfileid";
    clairvoyance: i64 = "clairvoyance" => "clairvoyance";
    classes: i64 = "classes" => "classes";
    clickeffect: i64 = "clickeffect" => "clickeffect";
    clicklevel: i64 = "clicklevel" => "clicklevel";
    clicklevel2: i64 = "clicklevel2" => "clicklevel2";
    clickname: String = "clickname" => "clickname";
    clicktype: i64 = "clicktype" => "clicktype";
    clickunk5: i64 = "clickunk5" => "clickunk5";
    clickunk6: String = "clickunk6" => "clickunk6";
    clickunk7: i64 = "clickunk7" => "clickunk7";
    color: i64 = "color" => "color";
    combateffects: String = "combateffects" => "combateffects";
    comment: String = "comment" => "comment";
    cr: i64 = "cr" => "cr";
    created: String = "created" => "created";
    damage: i64 = "damage" => "damage";
    damageshield: i64 = "damageshield" => "damageshield";
    deity: i64 = "deity" => "deity";
    delay: i64 = "delay" => "delay";
    dotshielding: i64 = "dotshielding" => "dotshielding";
    dr: i64 = "dr" => "dr";
    dsmitigation: i64 = "dsmitigation" => "dsmitigation";
    elemdmgamt: i64 = "elemdmgamt" => "elemdmgamt";
    elemdmgtype: i64 = "elemdmgtype" => "elemdmgtype";
    elitematerial: i64 = "elitematerial" => "elitematerial";
    endur: i64 = "endurance" => "endur";
    enduranceregen: i64 = "enduranceregen" => "enduranceregen";
    epicitem: i64 = "epicitem" => "epicitem";
    evoid: i64 = "evoid" => "evoid";
    evoitem: i64 = "evoitem" => "evoitem";
    evolvinglevel: i64 = "evolvinglevel" => "evolvinglevel";
    evomax: i64 = "evomax" => "evomax";
    expendablearrow: i64 = "expendablearrow" => "expendablearrow";
    extradmgamt: i64 = "extradmgamt" => "extradmgamt";
    extradmgskill: i64 = "extradmgskill" => "extradmgskill";
    factionamt1: i64 = "factionamt1" => "factionamt1";
    factionamt2: i64 = "factionamt2" => "factionamt2";
    factionamt3: i64 = "factionamt3" => "factionamt3";
    factionamt4: i64 = "factionamt4" => "factionamt4";
    factionmod1: i64 = "factionmod1" => "factionmod1";
    factionmod2: i64 = "factionmod2" => "factionmod2";
    factionmod3: i64 = "factionmod3" => "factionmod3";
    factionmod4: i64 = "factionmod4" => "factionmod4";
    favor: i64 = "favor" => "favor";
    filename: String = "filename" => "filename";
    focuseffect: i64 = "focuseffect" => "focuseffect";
    focuslevel: i64 = "focuslevel" => "focuslevel";
    focuslevel2: i64 = "focuslevel2" => "focuslevel2";
    focusname: String = "focusname" => "focusname";
    focustype: i64 = "focustype" => "focustype";
    focusunk1: i64 = "focusunk1" => "focusunk1";
    focusunk2: i64 = "focusunk2" => "focusunk2";
    focusunk3: i64 = "focusunk3" => "focusunk3";
    focusunk4: i64 = "focusunk4" => "focusunk4";
    focusunk5: i64 = "focusunk5" => "focusunk5";
    focusunk6: String = "focusunk6" => "focusunk6";
    focusunk7: i64 = "focusunk7" => "focusunk7";
    fr: i64 = "fr" => "fr";
    fvnodrop: i64 = "fvnodrop" => "fvnodrop";
    guildfavor: i64 = "guildfavor" => "guildfavor";
    haste: i64 = "haste" => "haste";
    healamt: i64 = "healamt" => "healamt";
    heirloom: i64 = "heirloom" => "heirloom";
    heroicagi: i64 = "heroic_agi" => "heroic_agi";
    heroiccha: i64 = "heroic_cha" => "heroic_cha";
    heroiccr: i64 = "heroic_cr" => "heroic_cr";
    heroicdex: i64 = "heroic_dex" => "heroic_dex";
    heroicdr: i64 = "heroic_dr" => "heroic_dr";
    heroicfr: i64 = "heroic_fr" => "heroic_fr";
    heroicint: i64 = "heroic_int" => "heroic_int";
    heroicmr: i64 = "heroic_mr" => "heroic_mr";
    heroicpr: i64 = "heroic_pr" => "heroic_pr";
    heroicsta: i64 = "heroic_sta" => "heroic_sta";
    heroicstr: i64 = "heroic_str" => "heroic_str";
    heroicsvcorrup: i64 = "heroic_svcorrup" => "heroic_svcorrup";
    heroicwis: i64 = "heroic_wis" => "heroic_wis";
    herosforgemodel: i64 = "heroforge1" => "herosforgemodel";
    hp: i64 = "hp" => "hp";
    icon: i64 = "icon" => "icon";
    idfile: String = "idfile" => "idfile";
    itemclass: i64 = "itemclass" => "itemclass";
    itemtype: i64 = "itemtype" => "itemtype";
    ldonprice: i64 = "ldonprice" => "ldonprice";
    ldonsellbackrate: i64 = "ldonsellbackrate" => "ldonsellbackrate";
    ldonsold: i64 = "ldonsold" => "ldonsold";
    ldontheme: i64 = "ldontheme" => "ldontheme";
    light: i64 = "light" => "light";
    lore: String = "lore" => "lore";
    lorefile: String = "lorefile" => "lorefile";
    loregroup: i64 = "loregroup" => "loregroup";
    magic: i64 = "magic" => "magic";
    mana: i64 = "mana" => "mana";
    manaregen: i64 = "manaregen" => "manaregen";
    material: i64 = "material" => "material";
    maxcharges: i64 = "maxcharges" => "maxcharges";
    minstatus: i64 = "minstatus" => "minstatus";
    mr: i64 = "mr" => "mr";
    nodrop: i64 = "nodrop" => "nodrop";
    nopet: i64 = "nopet" => "nopet";
    norent: i64 = "norent" => "norent";
    notransfer: i64 = "notransfer" => "notransfer";
    pendingloreflag: i64 = "pendingloreflag" => "pendingloreflag";
    placeable: i64 = "placeable" => "placeable";
    pointtype: i64 = "pointtype" => "pointtype";
    potionbelt: i64 = "potionbelt" => "potionbelt";
    potionbeltslots: i64 = "potionbeltslots" => "potionbeltslots";
    powersourcecapacity: i64 = "powersourcecap" => "powersourcecapacity";
    pr: i64 = "pr" => "pr";
    price: i64 = "price" => "price";
    proceffect: i64 = "proceffect" => "proceffect";
    proclevel: i64 = "proclevel" => "proclevel";
    proclevel2: i64 = "proclevel2" => "proclevel2";
    procname: String = "procname" => "procname";
    procrate: i64 = "procrate" => "procrate";
    proctype: i64 = "proctype" => "proctype";
    procunk1: i64 = "procunk1" => "procunk1";
    procunk2: i64 = "procunk2" => "procunk2";
    procunk3: i64 = "procunk3" => "procunk3";
    procunk4: i64 = "procunk4" => "procunk4";
    procunk6: String = "procunk6" => "procunk6";
    procunk7: i64 = "procunk7" => "procunk7";
    purity: i64 = "purity" => "purity";
    questitemflag: i64 = "questitemflag" => "questitemflag";
    races: i64 = "races" => "races";
    range: i64 = "therange" => "range";
    recastdelay: i64 = "recastdelay" => "recastdelay";
    recasttype: i64 = "recasttype" => "recasttype";
    reclevel: i64 = "reclevel" => "reclevel";
    recskill: i64 = "reqskill" => "recskill";
    regen: i64 = "regen" => "regen";
    reqlevel: i64 = "reqlevel" => "reqlevel";
    scriptfileid: i64 = "scriptfileid" => "scriptfileid";
    scrolleffect: i64 = "scrolleffect" => "scrolleffect";
    scrolllevel: i64 = "scrolllevel" => "scrolllevel";
    scrolllevel2: i64 = "scrolllevel2" => "scrolllevel2";
    scrollname: String = "scrollname" => "scrollname";
    scrolltype: i64 = "scrolleffecttype" => "scrolltype";
    scrollunk1: i64 = "scrollunk1" => "scrollunk1";
    scrollunk2: i64 = "scrollunk2" => "scrollunk2";
    scrollunk3: i64 = "scrollunk3" => "scrollunk3";
    scrollunk4: i64 = "scrollunk4" => "scrollunk4";
    scrollunk5: i64 = "scrollunk5" => "scrollunk5";
    scrollunk6: String = "scrollunk6" => "scrollunk6";
    scrollunk7: i64 = "scrollunk7" => "scrollunk7";
    sellrate: f64 = "sellrate" => "sellrate";
    serialization: Option<NaiveDateTime> = "serialization" => "serialization";
    serialized: Option<NaiveDateTime> = "serialized" => "serialized";
    shielding: i64 = "shielding" => "shielding";
    size: i64 = "size" => "size";
    skillmodmax: i64 = "skillmodmax" => "skillmodmax";
    skillmodtype: i64 = "skillmodtype" => "skillmodtype";
    skillmodvalue: i64 = "skillmodvalue" => "skillmodvalue";
    slots: i64 = "slots" => "slots";
    source: String = "source" => "source";
    spelldmg: i64 = "spelldmg" => "spelldmg";
    spellshield: i64 = "spellshield" => "spellshield";
    stackable: i64 = "stackable" => "stackable";
    stacksize: i64 = "stacksize" => "stacksize";
    strikethrough: i64 = "strikethrough" => "strikethrough";
    stunresist: i64 = "stunresist" => "stunresist";
    summonedflag: i64 = "summonedflag" => "summonedflag";
    svcorruption: i64 = "svcorruption" => "svcorruption";
    tradeskills: i64 = "tradeskills" => "tradeskills";
    unk012: i64 = "UNK012" => "UNK012";
    unk013: i64 = "UNK013" => "UNK013";
    unk014: i64 = "UNK014" => "UNK014";
    unk033: i64 = "UNK033" => "UNK033";
    unk054: i64 = "UNK054" => "UNK054";
    unk059: i64 = "UNK059" => "UNK059";
    unk060: i64 = "UNK060" => "UNK060";
    unk120: i64 = "UNK120" => "UNK120";
    unk121: i64 = "UNK121" => "UNK121";
    unk123: i64 = "UNK123" => "UNK123";
    unk124: i64 = "UNK124" => "UNK124";
    unk127: i64 = "UNK127" => "UNK127";
    unk132: String = "UNK132" => "UNK132";
    unk134: String = "UNK134" => "UNK134";
    unk137: i64 = "UNK137" => "UNK137";
    unk142: i64 = "UNK142" => "UNK142";
    unk147: i64 = "UNK147" => "UNK147";
    unk152: i64 = "UNK152" => "UNK152";
    unk157: i64 = "UNK157" => "UNK157";
    unk193: i64 = "UNK193" => "UNK193";
    unk214: i64 = "UNK214" => "UNK214";
    unk219: i64 = "UNK219" => "UNK219";
    unk220: i64 = "UNK220" => "UNK220";
    unk221: i64 = "UNK221" => "UNK221";
    unk223: i64 = "UNK223" => "UNK223";
    unk224: i64 = "UNK224" => "UNK224";
    unk225: i64 = "UNK225" => "UNK225";
    unk226: i64 = "UNK226" => "UNK226";
    unk227: i64 = "UNK227" => "UNK227";
    unk228: i64 = "UNK228" => "UNK228";
    unk229: i64 = "UNK229" => "UNK229";
    unk230: i64 = "UNK230" => "UNK230";
    unk231: i64 = "UNK231" => "UNK231";
    unk232: i64 = "UNK232" => "UNK232";
    unk233: i64 = "UNK233" => "UNK233";
    unk234: i64 = "UNK234" => "UNK234";
    unk236: i64 = "UNK236" => "UNK236";
    unk237: i64 = "UNK237" => "UNK237";
    unk238: i64 = "UNK238" => "UNK238";
    unk239: i64 = "UNK239" => "UNK239";
    unk240: i64 = "UNK240" => "UNK240";
    unk241: i64 = "UNK241" => "UNK241";
    updated: String = "updated" => "updated";
    verified: String = "verified" => "verified";
    weight: i64 = "weight" => "weight";
    worneffect: i64 = "worneffect" => "worneffect";
    wornlevel: i64 = "wornlevel" => "wornlevel";
    wornlevel2: i64 = "wornlevel2" => "wornlevel2";
    wornname: String = "wornname" => "wornname";
    worntype: i64 = "worntype" => "worntype";
    wornunk1: i64 = "wornunk1" => "wornunk1";
    wornunk2: i64 = "wornunk2" => "wornunk2";
    wornunk3: i64 = "wornunk3" => "wornunk3";
    wornunk4: i64 = "wornunk4" => "wornunk4";
    wornunk5: i64 = "wornunk5" => "wornunk5";
    wornunk6: String = "wornunk6" => "wornunk6";
    wornunk7: i64 = "wornunk7" => "wornunk7";

    // ===== 不支持落库（仅识别表头，值保留在记录中）=====
    augstricthidden: i64 = "augstricthidden";
    blessingeffect: i64 = "blessingeffect";
    blessingname: String = "blessingname";
    collectible: i64 = "collectible";
    collectversion: i64 = "collectversion";
    convertitem: i64 = "convertitem";
    convertid: i64 = "convertid";
    convertname: String = "convertname";
    evolvl: i64 = "evolvl";
    foodduration: i64 = "foodduration";
    freestorage: i64 = "freestorage";
    herosforgemodel2: i64 = "heroforge2";
    marketplace: i64 = "marketplace";
    materialunk1: i64 = "materialunk1";
    nodestroy: i64 = "nodestroy";
    noground: i64 = "noground";
    nonpc: i64 = "nonpc";
    nozone: i64 = "nozone";
    placeablebitfield: i64 = "placeablebitfield";
    placeablenpcname: String = "placeablenpcname";
    prestige: i64 = "prestige";
    prockunk1: i64 = "prockunk1";
    rightclickscriptid: i64 = "rightclickscriptid";
    skillmodexta: i64 = "skillmodextra";
    submitter: String = "submitter";
    unknown02: i64 = "UNKNOWN02";
    unknown03: i64 = "UNKNOWN03";
    unknown04: i64 = "UNKNOWN04";
    unknown06: i64 = "UNKNOWN06";
    unknown07: i64 = "UNKNOWN07";
    unknown08: i64 = "UNKNOWN08";
    unknown09: i64 = "UNKNOWN09";
    unknown10: i64 = "UNKNOWN10";
    unknown11: i64 = "UNKNOWN11";
    unknown12: i64 = "UNKNOWN12";
    unknown13: i64 = "UNKNOWN13";
    unknown14: String = "UNKNOWN14";
    unknown17: String = "UNKNOWN17";
    unknown18: String = "UNKNOWN18";
    unknown19: String = "UNKNOWN19";
    unknown20: String = "UNKNOWN20";
    unknown21: String = "UNKNOWN21";
    unknown22: String = "UNKNOWN22";
    unknown29: String = "UNKNOWN29";
    unknown30: String = "UNKNOWN30";
    unknown31: String = "UNKNOWN31";
    unknown32: String = "UNKNOWN32";
    unknown33: String = "UNKNOWN33";
    unknown34: String = "UNKNOWN34";
    unknown35: String = "UNKNOWN35";
    unknown36: String = "UNKNOWN36";
    unknown37: String = "UNKNOWN37";
    unknown38: String = "UNKNOWN38";
    unknown39: String = "UNKNOWN39";
    unknown40: String = "UNKNOWN40";
    unknown41: String = "UNKNOWN41";
    unknown42: String = "UNKNOWN42";
    unknown43: String = "UNKNOWN43";
    unknown44: String = "UNKNOWN44";
    unknown46: String = "UNKNOWN46";
    unknown47: String = "UNKNOWN47";
    unknown48: String = "UNKNOWN48";
    unknown49: String = "UNKNOWN49";
    unknown50: String = "UNKNOWN50";
    unknown51: String = "UNKNOWN51";
    unknown52: String = "UNKNOWN52";
    unknown53: String = "UNKNOWN53";
    unknown54: String = "UNKNOWN54";
    unknown55: String = "UNKNOWN55";
    unknown56: String = "UNKNOWN56";
    unknown57: String = "UNKNOWN57";
    unknown58: String = "UNKNOWN58";
    unknown59: String = "UNKNOWN59";
    unknown60: String = "UNKNOWN60";
    unknown61: String = "UNKNOWN61";
    unknown62: String = "UNKNOWN62";
    unknown63: String = "UNKNOWN63";
    unknown68: String = "UNKNOWN68";
    unknown69: String = "UNKNOWN69";
    unknown70: String = "UNKNOWN70";
    unknown71: String = "UNKNOWN71";
    unknown73: String = "UNKNOWN73";
    unknown76: String = "UNKNOWN76";
    unknown77: String = "UNKNOWN77";
    unknown78: String = "UNKNOWN78";
    unknown79: String = "UNKNOWN79";
    verifiedby: String = "verifiedby";
}

/// 主键列名
pub const PRIMARY_KEY_COLUMN: &str = "id";

/// 存储表名
pub const ITEMS_TABLE: &str = "items";

impl ItemRecord {
    /// 落库属性（按映射表顺序）
    pub fn persisted_fields() -> impl Iterator<Item = &'static FieldMapping<ItemRecord>> {
        ITEM_FIELDS.iter().filter(|m| m.is_persisted())
    }

    /// 按落库列顺序导出全部列值
    pub fn column_values(&self) -> Vec<(&'static str, FieldValue)> {
        Self::persisted_fields()
            .filter_map(|m| m.column.map(|column| (column, m.get(self))))
            .collect()
    }

    /// 主键的字符串形式
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }
}

// ==========================================
// ItemFieldIndex - 源列名查找表
// ==========================================
// 启动时构建一次；查找忽略 ASCII 大小写
#[derive(Debug)]
pub struct ItemFieldIndex {
    by_source: HashMap<String, &'static FieldMapping<ItemRecord>>,
}

impl ItemFieldIndex {
    pub fn new() -> Self {
        let by_source = ITEM_FIELDS
            .iter()
            .map(|m| (m.source.to_ascii_lowercase(), m))
            .collect();
        Self { by_source }
    }

    pub fn lookup(&self, source: &str) -> Option<&'static FieldMapping<ItemRecord>> {
        self.by_source
            .get(&source.trim().to_ascii_lowercase())
            .copied()
    }

    pub fn len(&self) -> usize {
        self.by_source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_source.is_empty()
    }
}

impl Default for ItemFieldIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::FieldKind;
    use std::collections::HashSet;

    #[test]
    fn test_mapping_table_shape() {
        assert_eq!(ITEM_FIELDS.len(), 372);
        assert_eq!(ItemRecord::persisted_fields().count(), 285);
        assert_eq!(ITEM_FIELDS[0].column, Some(PRIMARY_KEY_COLUMN));
    }

    #[test]
    fn test_source_names_unique_ignoring_case() {
        let index = ItemFieldIndex::new();
        assert_eq!(index.len(), ITEM_FIELDS.len());
    }

    #[test]
    fn test_columns_unique() {
        let columns: HashSet<_> = ItemRecord::persisted_fields()
            .filter_map(|m| m.column)
            .collect();
        assert_eq!(columns.len(), 285);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let index = ItemFieldIndex::new();
        let name = index.lookup("Name").unwrap();
        assert_eq!(name.attr, "name");
        assert_eq!(name.column, Some("Name"));
        assert_eq!(index.lookup(" ID ").unwrap().attr, "id");
        assert!(index.lookup("no_such_column").is_none());
    }

    #[test]
    fn test_renamed_and_unsupported_sources() {
        let index = ItemFieldIndex::new();
        assert_eq!(index.lookup("therange").unwrap().column, Some("range"));
        assert_eq!(index.lookup("attunable").unwrap().column, Some("attuneable"));

        let blessing = index.lookup("blessingname").unwrap();
        assert!(!blessing.is_persisted());
        assert_eq!(blessing.kind, FieldKind::Text);
    }

    #[test]
    fn test_setter_and_getter() {
        let index = ItemFieldIndex::new();
        let ac = index.lookup("ac").unwrap();
        let mut record = ItemRecord::default();

        assert!(ac.set(&mut record, FieldValue::Int(10)));
        assert_eq!(record.ac, 10);
        assert_eq!(ac.get(&record), FieldValue::Int(10));

        // 类型不一致时不修改
        assert!(!ac.set(&mut record, FieldValue::Text("x".to_string())));
        assert_eq!(record.ac, 10);
    }

    #[test]
    fn test_timestamp_fields() {
        let index = ItemFieldIndex::new();
        let serialized = index.lookup("serialized").unwrap();
        assert_eq!(serialized.kind, FieldKind::Timestamp);

        let record = ItemRecord::default();
        assert_eq!(serialized.get(&record), FieldValue::Timestamp(None));
        let _: Option<NaiveDateTime> = record.serialized;
    }

    #[test]
    fn test_column_values_follow_record() {
        let record = ItemRecord {
            id: 5,
            name: "Sword of Testing".to_string(),
            ac: 10,
            ..Default::default()
        };
        let values = record.column_values();
        assert_eq!(values.len(), 285);
        assert_eq!(values[0], ("id", FieldValue::Int(5)));
        assert_eq!(values[1], ("Name", FieldValue::Text("Sword of Testing".to_string())));
        assert_eq!(record.id_string(), "5");
    }
}
