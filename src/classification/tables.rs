//! C-code lookup tables (Japanese book classification code standard)
//!
//! Every table covers its whole domain. Codes the standard leaves unassigned
//! map to [`UNUSED`] instead of being absent.

use once_cell::sync::Lazy;

/// Label for a code with no assigned meaning
pub const UNUSED: &str = "未使用";

/// First digit: sales target (販売対象)
pub static TARGETS: [&str; 10] = [
    "一般",
    "教養",
    "実用",
    "専門",
    "検定教科書・消費税非課税品・その他",
    "婦人",
    "学参I（小中）",
    "学参II（高校）",
    "児童",
    "雑誌扱い",
];

/// Second digit: publication format (発行形態)
pub static FORMATS: [&str; 10] = [
    "単行本",
    "文庫",
    "新書",
    "全集・双書",
    "ムック・その他",
    "事・辞典",
    "図鑑",
    "絵本",
    "磁性媒体など",
    "コミック",
];

/// Assigned content categories (内容), keyed by the last two digits
const ASSIGNED_CONTENTS: &[(usize, &str)] = &[
    // 総記
    (0, "総記"),
    (1, "百科事典"),
    (2, "年鑑・雑誌"),
    (4, "情報科学"),
    // 哲学・宗教・心理学
    (10, "哲学"),
    (11, "心理（学）"),
    (12, "倫理（学）"),
    (14, "宗教"),
    (15, "仏教"),
    (16, "キリスト教"),
    // 歴史・地理
    (20, "歴史総記"),
    (21, "日本歴史"),
    (22, "外国歴史"),
    (23, "伝記"),
    (25, "地理"),
    (26, "旅行"),
    // 社会科学
    (30, "社会科学総記"),
    (31, "政治－含む国防軍事"),
    (32, "法律"),
    (33, "経済・財政・統計"),
    (34, "経営"),
    (36, "社会"),
    (37, "教育"),
    (39, "民族・風習"),
    // 自然科学
    (40, "自然科学総記"),
    (41, "数学"),
    (42, "物理学"),
    (43, "化学"),
    (44, "天文・地学"),
    (45, "生物学"),
    (47, "医学・歯学・薬学"),
    // 工学・工業
    (50, "工学・工学総記"),
    (51, "土木"),
    (52, "建築"),
    (53, "機械"),
    (54, "電気"),
    (55, "電子通信"),
    (56, "海事"),
    (57, "採鉱・冶金"),
    (58, "その他の工業"),
    // 産業
    (60, "産業総記"),
    (61, "農林業"),
    (62, "水産業"),
    (63, "商業"),
    (65, "交通・通信"),
    // 芸術・生活
    (70, "芸術総記"),
    (71, "絵画・彫刻"),
    (72, "写真・工芸"),
    (73, "音楽・舞踊"),
    (74, "演劇・映画"),
    (75, "体育・スポーツ"),
    (76, "諸芸・娯楽"),
    (77, "家事"),
    (79, "コミックス・劇画"),
    // 語学
    (80, "語学総記"),
    (81, "日本語"),
    (82, "英米語"),
    (84, "ドイツ語"),
    (85, "フランス語"),
    (87, "各国語"),
    // 文学
    (90, "文学総記"),
    (91, "日本文学総記"),
    (92, "日本文学詩歌"),
    (93, "日本文学、小説・物語"),
    (95, "日本文学、評論、随筆、その他"),
    (97, "外国文学小説"),
    (98, "外国文学、その他"),
];

/// Content labels indexed by target digit then content code.
///
/// The standard assigns the same content categories under every sales
/// target, so each row is built from the same assignments.
pub static CONTENTS: Lazy<[[&str; 100]; 10]> = Lazy::new(|| {
    let mut row = [UNUSED; 100];
    for &(code, label) in ASSIGNED_CONTENTS {
        row[code] = label;
    }
    [row; 10]
});

/// # Panics
/// If `digit` is not in `0..=9`.
pub fn target_label(digit: usize) -> &'static str {
    TARGETS[digit]
}

/// # Panics
/// If `digit` is not in `0..=9`.
pub fn format_label(digit: usize) -> &'static str {
    FORMATS[digit]
}

/// # Panics
/// If `target` is not in `0..=9` or `content` not in `0..=99`.
pub fn content_label(target: usize, content: usize) -> &'static str {
    CONTENTS[target][content]
}
