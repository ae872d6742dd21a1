//! Region name catalog grouped by administrative level.

use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Level name used when the stored catalog is a bare list of names.
pub const DEFAULT_LEVEL: &str = "default";

/// Province level of the default catalog.
pub const PROVINCE_LEVEL: &str = "省级";
/// City level of the default catalog.
pub const CITY_LEVEL: &str = "市级";
/// District level of the default catalog.
pub const DISTRICT_LEVEL: &str = "区级";

const PROVINCES: &[&str] = &[
    "北京", "天津", "上海", "重庆", "香港", "澳门", "内蒙古", "广西", "西藏", "宁夏", "新疆", "河北", "山西", "辽宁",
    "吉林", "黑龙江", "江苏", "浙江", "安徽", "福建", "江西", "山东", "河南", "湖北", "湖南", "广东", "海南", "四川",
    "贵州", "云南", "陕西", "甘肃", "青海",
];

const CITIES: &[&str] = &[
    "石家庄", "唐山", "张家口", "太原", "沈阳", "大连", "辽阳", "长春", "松原", "延边", "哈尔滨", "齐齐哈尔", "南京", "无锡",
    "徐州", "常州", "苏州", "南通", "连云港", "淮安", "盐城", "扬州", "镇江", "泰州", "宿迁", "杭州", "宁波", "温州",
    "嘉兴", "湖州", "绍兴", "金华", "衢州", "舟山", "台州", "丽水", "合肥", "六安", "亳州", "福州", "厦门", "南昌", "赣州",
    "济南", "青岛", "淄博", "郑州", "开封", "洛阳", "焦作", "武汉", "黄石", "十堰", "宜昌", "襄阳", "鄂州", "荆门", "孝感",
    "荆州", "黄冈", "咸宁", "随州", "恩施", "仙桃", "潜江", "天门", "神农架林区", "长沙", "株洲", "湘潭", "岳阳", "广州",
    "深圳", "肇庆", "惠州", "梅州", "海口", "三亚", "成都", "甘孜", "凉山", "贵阳", "黔西南", "黔东南", "黔南", "昆明",
    "西安", "榆林", "兰州", "西宁",
];

const DISTRICTS: &[&str] = &[
    "东城", "西城", "朝阳", "丰台", "石景山", "海淀", "门头沟", "房山", "通州", "顺义", "昌平", "大兴", "怀柔", "平谷",
    "密云", "延庆", "和平", "河东", "河西", "南开", "河北", "红桥", "东丽", "西青", "津南", "北辰", "武清", "宝坻",
    "滨海新", "宁河", "静海", "蓟州", "黄浦", "徐汇", "长宁", "静安", "普陀", "虹口", "杨浦", "闵行", "宝山", "嘉定",
    "浦东", "金山", "松江", "青浦", "奉贤", "崇明", "万州", "涪陵", "渝中", "大渡口", "江北", "沙坪坝", "九龙坡", "南岸",
    "北碚", "綦江", "大足", "渝北", "巴南", "黔江", "长寿", "江津", "合川", "永川", "南川", "璧山", "铜梁", "潼南", "荣昌",
    "开州", "梁平", "武隆", "城口", "丰都", "垫江", "忠县", "云阳", "奉节", "巫山", "巫溪",
];

/// Ordered mapping of level name to region names.
///
/// Serializes as a JSON object of level → array of names, levels and names in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RegionCatalog {
    levels: IndexMap<String, Vec<String>>,
}

impl RegionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in catalog of Chinese provinces, cities and districts.
    pub fn default_china() -> Self {
        let mut catalog = Self::new();
        for (level, names) in [
            (PROVINCE_LEVEL, PROVINCES),
            (CITY_LEVEL, CITIES),
            (DISTRICT_LEVEL, DISTRICTS),
        ] {
            catalog
                .levels
                .insert(level.to_string(), names.iter().map(|n| n.to_string()).collect());
        }
        catalog
    }

    /// Parse a catalog from JSON text. See [`RegionCatalog::from_value`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Build a catalog from a JSON value.
    ///
    /// Accepted shapes:
    /// - an object of level → array of names
    /// - a bare array of names, stored under [`DEFAULT_LEVEL`]
    /// - an object whose level values are nested objects, flattened key first
    ///   (`{"湖北": {"武汉": ["江岸"]}}` gives `湖北, 武汉, 江岸`)
    pub fn from_value(value: &Value) -> Result<Self> {
        let mut catalog = Self::new();
        match value {
            Value::Array(_) => {
                catalog.levels.insert(DEFAULT_LEVEL.to_string(), flatten_names(value));
            },
            Value::Object(map) => {
                for (level, names) in map {
                    if !matches!(names, Value::Array(_) | Value::Object(_) | Value::String(_)) {
                        return Err(Error::InvalidCatalog(format!(
                            "level '{}' must hold names, found {}",
                            level, names
                        )));
                    }
                    catalog.levels.insert(level.clone(), flatten_names(names));
                }
            },
            other => {
                return Err(Error::InvalidCatalog(format!(
                    "expected an object or an array, found {}",
                    other
                )));
            },
        }
        Ok(catalog)
    }

    /// Level names in order.
    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    /// Names stored under a level.
    pub fn level(&self, level: &str) -> Option<&[String]> {
        self.levels.get(level).map(Vec::as_slice)
    }

    /// Add an empty level if it does not exist yet.
    pub fn ensure_level(&mut self, level: &str) {
        self.levels.entry(level.to_string()).or_default();
    }

    /// All names, level by level. Level labels are not included; a name
    /// listed under two levels appears twice.
    pub fn names(&self) -> Vec<String> {
        self.levels.values().flatten().cloned().collect()
    }

    /// Total number of names.
    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    /// True when no level holds a name.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `name` is listed under `level`.
    pub fn contains(&self, level: &str, name: &str) -> bool {
        self.level(level).is_some_and(|names| names.iter().any(|n| n == name))
    }

    /// Append a name to a level. Returns the trimmed name.
    pub fn add(&mut self, level: &str, name: &str) -> Result<String> {
        let name = name.trim();
        let names = self.level_mut(level)?;
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if names.iter().any(|n| n == name) {
            return Err(Error::DuplicateName {
                level: level.to_string(),
                name: name.to_string(),
            });
        }
        names.push(name.to_string());
        Ok(name.to_string())
    }

    /// Remove a name from a level.
    pub fn remove(&mut self, level: &str, name: &str) -> Result<()> {
        let names = self.level_mut(level)?;
        let position = names.iter().position(|n| n == name).ok_or_else(|| {
            Error::NameNotFound {
                level: level.to_string(),
                name: name.to_string(),
            }
        })?;
        names.remove(position);
        Ok(())
    }

    /// Replace a name in place, keeping its position. Returns the trimmed new name.
    pub fn rename(&mut self, level: &str, old: &str, new: &str) -> Result<String> {
        let new = new.trim();
        let names = self.level_mut(level)?;
        if new.is_empty() {
            return Err(Error::EmptyName);
        }
        let position = names.iter().position(|n| n == old).ok_or_else(|| {
            Error::NameNotFound {
                level: level.to_string(),
                name: old.to_string(),
            }
        })?;
        if names.iter().any(|n| n == new) {
            return Err(Error::DuplicateName {
                level: level.to_string(),
                name: new.to_string(),
            });
        }
        names[position] = new.to_string();
        Ok(new.to_string())
    }

    fn level_mut(&mut self, level: &str) -> Result<&mut Vec<String>> {
        self.levels
            .get_mut(level)
            .ok_or_else(|| Error::UnknownLevel(level.to_string()))
    }
}

/// Flatten nested JSON names: object keys come before their children.
fn flatten_names(value: &Value) -> Vec<String> {
    fn walk(value: &Value, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (key, child) in map {
                    out.push(key.clone());
                    walk(child, out);
                }
            },
            Value::Array(items) => items.iter().for_each(|item| walk(item, out)),
            Value::String(name) => out.push(name.clone()),
            _ => {},
        }
    }

    let mut names = Vec::new();
    walk(value, &mut names);
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_china_levels() {
        let catalog = RegionCatalog::default_china();
        let levels: Vec<&str> = catalog.levels().collect();
        assert_eq!(levels, vec![PROVINCE_LEVEL, CITY_LEVEL, DISTRICT_LEVEL]);
        assert_eq!(catalog.level(PROVINCE_LEVEL).unwrap()[0], "北京");
        assert!(catalog.contains(CITY_LEVEL, "神农架林区"));
        assert!(catalog.contains(DISTRICT_LEVEL, "巫溪"));
    }

    #[test]
    fn test_names_exclude_level_labels_and_keep_duplicates() {
        let catalog = RegionCatalog::default_china();
        let names = catalog.names();
        assert!(!names.iter().any(|n| n == PROVINCE_LEVEL));
        // 河北 is both a province and a Tianjin district
        assert_eq!(names.iter().filter(|n| *n == "河北").count(), 2);
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_from_value_levels() {
        let catalog =
            RegionCatalog::from_value(&json!({"b": ["x", "y"], "a": ["z"]})).unwrap();
        let levels: Vec<&str> = catalog.levels().collect();
        assert_eq!(levels, vec!["b", "a"]);
        assert_eq!(catalog.names(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_from_value_bare_list() {
        let catalog = RegionCatalog::from_value(&json!(["北京", "上海"])).unwrap();
        assert_eq!(catalog.level(DEFAULT_LEVEL).unwrap(), &["北京", "上海"]);
    }

    #[test]
    fn test_from_value_nested() {
        let catalog =
            RegionCatalog::from_value(&json!({"省": {"湖北": {"武汉": ["江岸", "汉阳"]}}}))
                .unwrap();
        assert_eq!(catalog.names(), vec!["湖北", "武汉", "江岸", "汉阳"]);
    }

    #[test]
    fn test_from_value_rejects_scalars() {
        assert!(matches!(
            RegionCatalog::from_value(&json!(42)),
            Err(Error::InvalidCatalog(_))
        ));
        assert!(matches!(
            RegionCatalog::from_value(&json!({"省": 1})),
            Err(Error::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_add() {
        let mut catalog = RegionCatalog::default_china();
        assert_eq!(catalog.add(CITY_LEVEL, " 珠海 ").unwrap(), "珠海");
        assert_eq!(catalog.level(CITY_LEVEL).unwrap().last().unwrap(), "珠海");

        assert!(matches!(catalog.add(CITY_LEVEL, "珠海"), Err(Error::DuplicateName { .. })));
        assert!(matches!(catalog.add(CITY_LEVEL, "  "), Err(Error::EmptyName)));
        assert!(matches!(catalog.add("县级", "x"), Err(Error::UnknownLevel(_))));
    }

    #[test]
    fn test_remove() {
        let mut catalog = RegionCatalog::default_china();
        catalog.remove(PROVINCE_LEVEL, "北京").unwrap();
        assert!(!catalog.contains(PROVINCE_LEVEL, "北京"));
        assert!(matches!(
            catalog.remove(PROVINCE_LEVEL, "北京"),
            Err(Error::NameNotFound { .. })
        ));
        assert!(matches!(catalog.remove("县级", "北京"), Err(Error::UnknownLevel(_))));
    }

    #[test]
    fn test_rename_keeps_position() {
        let mut catalog = RegionCatalog::from_value(&json!({"l": ["a", "b", "c"]})).unwrap();
        catalog.rename("l", "b", " B ").unwrap();
        assert_eq!(catalog.level("l").unwrap(), &["a", "B", "c"]);
        assert!(matches!(catalog.rename("l", "a", "c"), Err(Error::DuplicateName { .. })));
        assert!(matches!(catalog.rename("l", "zz", "y"), Err(Error::NameNotFound { .. })));
    }

    #[test]
    fn test_serializes_as_level_object() {
        let mut catalog = RegionCatalog::new();
        catalog.ensure_level("省级");
        catalog.add("省级", "北京").unwrap();
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"省级":["北京"]}"#);
    }
}
