use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use sqlx::FromRow;

/// users 表中的一行记录，同时也是写入缓存的 JSON 结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub created_at: NaiveDateTime,
}

/// 新建用户的请求体，所有字段都是可选的
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NewUser {
    #[serde(default, deserialize_with = "coerce_name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "coerce_age")]
    pub age: Option<i32>,
}

impl NewUser {
    /// 只解析 JSON 类型的请求体；其他类型、空请求体和数组都按 `{}` 处理
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Result<Self, serde_json::Error> {
        if !content_type.is_some_and(is_json) || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        match serde_json::from_slice::<Value>(body)? {
            Value::Array(_) => Ok(Self::default()),
            value => serde_json::from_value(value),
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || essence.ends_with("+json")
}

// 字符串原样保留，数字和布尔值转成文本，例如 123 -> "123"、true -> "true"
fn coerce_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Number(n) => Ok(Some(number_text(&n))),
        other => Err(D::Error::custom(format!(
            "invalid input for type character varying: {}",
            other
        ))),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) if f.fract() == 0.0 => format!("{:.0}", f),
            Some(f) => f.to_string(),
            None => n.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseInt {
    Int(i64),
    Float(f64),
    Text(String),
}

// 接受整数、整数值的浮点数或数字字符串，例如 36、36.0、"36"
fn coerce_age<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<LooseInt>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(LooseInt::Int(v)) => v,
        Some(LooseInt::Float(v)) if v.fract() == 0.0 && v.is_finite() => v as i64,
        Some(LooseInt::Float(v)) => {
            return Err(D::Error::custom(format!(
                "invalid input syntax for type integer: \"{}\"",
                v
            )));
        }
        Some(LooseInt::Text(s)) => s.trim().parse::<i64>().map_err(|_| {
            D::Error::custom(format!("invalid input syntax for type integer: \"{}\"", s))
        })?,
    };

    i32::try_from(value)
        .map(Some)
        .map_err(|_| D::Error::custom(format!("value \"{}\" is out of range for type integer", value)))
}
