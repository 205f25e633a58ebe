//! IO helper: safe file read/write for JSON

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::{ser::PrettyFormatter, Serializer, Value};

use crate::model::template::TemplateError;

/// 从文件读取JSON数据
pub fn read_json_file(p: &Path) -> Result<Value, TemplateError> {
    let f = File::open(p)?;
    let rdr = BufReader::new(f);
    let v: Value = serde_json::from_reader(rdr)?;
    Ok(v)
}

/// 将JSON数据保存到文件（4空格缩进，便于人工阅读）
pub fn write_json_file(p: &Path, value: &Value) -> Result<(), TemplateError> {
    let f = File::create(p)?;
    let mut w = BufWriter::new(f);
    let fmt = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut w, fmt);
    value.serialize(&mut ser)?;
    w.flush()?;
    Ok(())
}
