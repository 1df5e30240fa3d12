use crate::error::{AppError, AppResult, FileError};
use crate::models::template::{is_valid_content_key, ContentTemplates, SubjectTemplate};
use futures::future::try_join_all;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 内置内容：(内容集键, TOML 文本)
const EMBEDDED_CONTENT: &[(&str, &str)] = &[
    ("english", include_str!("../../../content/english.toml")),
    ("japan", include_str!("../../../content/japan.toml")),
];

/// 解析一份 TOML 内容文本
///
/// # 参数
/// - `key`: 内容集键，仅用于错误信息
/// - `text`: TOML 文本
pub fn parse_content(key: &str, text: &str) -> AppResult<SubjectTemplate> {
    toml::from_str(text).map_err(|e| AppError::toml_parse_failed(key, e))
}

/// 加载编译进程序的内置内容
pub fn embedded_content() -> AppResult<ContentTemplates> {
    let mut templates = ContentTemplates::new();
    for (key, text) in EMBEDDED_CONTENT {
        templates.insert(*key, parse_content(key, text)?);
    }
    Ok(templates)
}

/// 从 TOML 文件加载一个内容集，文件名（不含扩展名）作为内容集键
pub async fn load_content_file(path: &Path) -> AppResult<(String, SubjectTemplate)> {
    let key = content_key(path)?;

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    let template: SubjectTemplate = toml::from_str(&content)
        .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))?;

    Ok((key, template))
}

/// 从文件夹中加载所有 TOML 内容文件
///
/// 任何一个文件读取或解析失败都会让整批加载失败。
pub async fn load_content_folder(folder_path: &str) -> AppResult<ContentTemplates> {
    let folder = PathBuf::from(folder_path);

    if !folder.is_dir() {
        return Err(AppError::File(FileError::DirectoryNotFound {
            path: folder_path.to_string(),
        }));
    }

    let mut paths = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(folder_path, e))?
    {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 TOML 文件", folder_path);
    }

    let loaded = try_join_all(paths.iter().map(|p| load_content_file(p))).await?;

    let mut templates = ContentTemplates::new();
    for (key, template) in loaded {
        tracing::info!("成功加载内容集 {}: {} 个课程", key, template.curriculums.len());
        templates.insert(key, template);
    }

    Ok(templates)
}

fn content_key(path: &Path) -> AppResult<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| is_valid_content_key(s))
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::File(FileError::InvalidContentKey {
                path: path.display().to_string(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionType;

    #[test]
    fn test_embedded_content_parses() {
        let templates = embedded_content().unwrap();

        assert_eq!(templates.len(), 2);
        assert!(templates.get("english").is_some());
        assert!(templates.get("japan").is_some());
        assert!(templates.question_count() > 0);
    }

    #[test]
    fn test_embedded_content_covers_every_question_type() {
        let templates = embedded_content().unwrap();
        let mut kinds: Vec<QuestionType> = templates
            .iter()
            .flat_map(|(_, s)| s.curriculums.iter())
            .flat_map(|c| c.lessons.iter())
            .flat_map(|l| l.questions.iter())
            .map(|q| q.data.kind())
            .collect();
        kinds.sort();
        kinds.dedup();

        assert_eq!(kinds, QuestionType::ALL.to_vec());
    }

    #[test]
    fn test_parse_content_reports_key_on_error() {
        let err = parse_content("broken", "name = ").unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn test_content_key_from_file_name() {
        assert_eq!(content_key(Path::new("/tmp/english.toml")).unwrap(), "english");
        assert!(content_key(Path::new("/tmp/Japan.toml")).is_err());
    }

    #[test]
    fn test_misspelled_table_rejects_file() {
        // questions 写成 question 时整份内容都要被拒绝，而不是丢掉题目
        let text = r#"
name = "English"
description = "English basics"

[[curriculums]]
name = "A1"
description = "Beginner"

[[curriculums.lessons]]
name = "Facts"
description = "True or false"
order = 1

[[curriculums.lessons.question]]
type = "TRUE_FALSE"
difficulty = "EASY"
questionText = "The sun is cold."

[curriculums.lessons.question.questionData]
correctAnswers = ["maybe"]
"#;
        let err = parse_content("english", text).unwrap_err();
        assert!(err.to_string().contains("english"));
    }

    #[tokio::test]
    async fn test_load_content_file_rejects_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("english.toml");
        std::fs::write(&path, "name = \"English\"\ndescription = \"x\"\ndescripton = \"typo\"\n")
            .unwrap();

        let err = load_content_file(&path).await.unwrap_err();
        assert!(matches!(err, AppError::File(FileError::TomlParseFailed { .. })));
    }
}
