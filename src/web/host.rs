//! Host document and mount point.
//!
//! The site owns the subtree of the element with `id="root"` in the host
//! document. [`MountPoint`] splits the document around that subtree once at
//! startup, so mounting a rendered shell is a plain concatenation.

use crate::error::AppError;
use std::path::Path;

/// Id of the element the shell is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Host document used when `HOST_PAGE` is not configured.
pub const DEFAULT_HOST_PAGE: &str = include_str!("../../assets/index.html");

/// Host document split around the mount element's content.
#[derive(Debug, Clone)]
pub struct MountPoint {
    head: String,
    tail: String,
}

impl MountPoint {
    /// Locates the mount element in `document`.
    ///
    /// Existing children of the mount element are discarded; they are
    /// replaced by the rendered shell on every response.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MountMissing`] if no element carries `id="root"`.
    pub fn attach(document: &str) -> Result<Self, AppError> {
        let tag = find_mount_tag(document).ok_or(AppError::MountMissing)?;

        if tag.self_closing {
            let open = document[tag.start..=tag.end].trim_end_matches('>');
            let open = open.trim_end_matches('/').trim_end();

            return Ok(Self {
                head: format!("{}{}>", &document[..tag.start], open),
                tail: format!("</{}>{}", tag.name, &document[tag.end + 1..]),
            });
        }

        let content_start = tag.end + 1;
        let content_end =
            find_closing_tag(document, tag.name, content_start).unwrap_or(document.len());

        Ok(Self {
            head: document[..content_start].to_string(),
            tail: document[content_end..].to_string(),
        })
    }

    /// Reads the host document from `path`, or uses the embedded one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::HostPage`] if the file cannot be read and
    /// [`AppError::MountMissing`] if it has no mount element.
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let Some(path) = path else {
            return Self::attach(DEFAULT_HOST_PAGE);
        };

        let document = std::fs::read_to_string(path).map_err(|source| AppError::HostPage {
            path: path.to_path_buf(),
            source,
        })?;

        Self::attach(&document)
    }

    /// Length of the document [`MountPoint::render`] produces for a fragment
    /// of `fragment_len` bytes.
    pub fn document_len(&self, fragment_len: usize) -> usize {
        self.head.len() + fragment_len + self.tail.len()
    }

    /// Places `fragment` inside the mount element and returns the full document.
    pub fn render(&self, fragment: &str) -> String {
        let mut document = String::with_capacity(self.document_len(fragment.len()));
        document.push_str(&self.head);
        document.push_str(fragment);
        document.push_str(&self.tail);
        document
    }
}

/// Opening tag of the mount element. `start` and `end` index `<` and `>`.
struct OpenTag<'a> {
    name: &'a str,
    start: usize,
    end: usize,
    self_closing: bool,
}

fn find_mount_tag(document: &str) -> Option<OpenTag<'_>> {
    let mut cursor = 0;

    while let Some(offset) = document[cursor..].find('<') {
        let start = cursor + offset;
        let end = start + document[start..].find('>')?;
        let tag = &document[start + 1..end];
        cursor = end + 1;

        if tag.starts_with('/') || tag.starts_with('!') || !has_mount_id(tag) {
            continue;
        }

        return Some(OpenTag {
            name: tag_name(tag),
            start,
            end,
            self_closing: tag.ends_with('/'),
        });
    }

    None
}

/// Returns the index of the `<` that closes the element opened before `from`.
fn find_closing_tag(document: &str, name: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut cursor = from;

    while let Some(offset) = document[cursor..].find('<') {
        let start = cursor + offset;
        let end = start + document[start..].find('>')?;
        let tag = &document[start + 1..end];
        cursor = end + 1;

        if let Some(closing) = tag.strip_prefix('/') {
            if closing.trim_end().eq_ignore_ascii_case(name) {
                depth -= 1;
                if depth == 0 {
                    return Some(start);
                }
            }
        } else if tag_name(tag).eq_ignore_ascii_case(name) && !tag.ends_with('/') {
            depth += 1;
        }
    }

    None
}

fn tag_name(tag: &str) -> &str {
    tag.split(|c: char| c.is_ascii_whitespace() || c == '/')
        .next()
        .unwrap_or_default()
}

fn has_mount_id(tag: &str) -> bool {
    tag.match_indices("id=").any(|(pos, _)| {
        let at_boundary = tag[..pos]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());

        at_boundary && attribute_value_is_mount_id(&tag[pos + 3..])
    })
}

fn attribute_value_is_mount_id(value: &str) -> bool {
    if let Some(quote) = value.chars().next().filter(|&c| c == '"' || c == '\'') {
        return value[1..]
            .strip_prefix(MOUNT_ELEMENT_ID)
            .is_some_and(|rest| rest.starts_with(quote));
    }

    value.strip_prefix(MOUNT_ELEMENT_ID).is_some_and(|rest| {
        rest.is_empty() || rest.starts_with(|c: char| c.is_ascii_whitespace() || c == '/')
    })
}
