#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("no connection")]
    NoConnection,
    #[error("{status} {text}")]
    Status { status: u16, text: String },
    #[error("deserialization failed: {0}")]
    Deserialization(String),
    #[error("expected at most one row, got {0}")]
    MultipleRows(usize),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error>),
}

/// Failure that ends a page view.
///
/// The messages are shown to the user as they are.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("운동 정보를 찾을 수 없습니다.")]
    ExerciseNotFound,
    #[error("유효하지 않거나 만료된 초대 링크입니다.")]
    InvalidInvite,
    #[error("회원 정보를 찾을 수 없습니다.")]
    MemberNotFound,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_read_error_from_storage_error() {
        assert!(matches!(
            ReadError::from(StorageError::NoConnection),
            ReadError::Storage(StorageError::NoConnection)
        ));
        assert!(matches!(
            ReadError::from(Box::<dyn std::error::Error>::from("foo")),
            ReadError::Other(error) if error.to_string() == "foo"
        ));
    }

    #[rstest]
    #[case(StorageError::NoConnection, "no connection")]
    #[case(
        StorageError::Status { status: 404, text: "Not Found".to_string() },
        "404 Not Found"
    )]
    #[case(StorageError::MultipleRows(2), "expected at most one row, got 2")]
    fn test_storage_error_display(#[case] error: StorageError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
        assert_eq!(ReadError::from(error).to_string(), expected);
    }

    #[rstest]
    #[case(PageError::ExerciseNotFound, "운동 정보를 찾을 수 없습니다.")]
    #[case(PageError::InvalidInvite, "유효하지 않거나 만료된 초대 링크입니다.")]
    #[case(PageError::MemberNotFound, "회원 정보를 찾을 수 없습니다.")]
    fn test_page_error_display(#[case] error: PageError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
