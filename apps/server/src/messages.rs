//! User-facing (Korean) messages returned in JSON bodies and pages.

pub const REQUESTS_LOAD_FAILED: &str = "요청 목록을 불러오는데 실패했습니다.";
pub const REQUEST_FIELDS_REQUIRED: &str = "필수 항목을 모두 입력해주세요.";
pub const REQUEST_PREFERRED_AT_INVALID: &str = "희망 방문 일시 형식이 올바르지 않습니다.";

pub const REVERIFY_SUCCEEDED: &str = "리뷰 재검증이 완료되었습니다.";
pub const REVERIFY_FAILED: &str = "리뷰 재검증 중 오류가 발생했습니다.";

pub const INVALID_HOSPITAL_ID: &str = "유효하지 않은 병원 ID입니다.";
pub const INVALID_QNA_ID: &str = "유효하지 않은 Q&A ID입니다.";
pub const INVALID_USER_ID: &str = "유효하지 않은 사용자 ID입니다.";

pub const HOSPITAL_NOT_FOUND: &str = "병원을 찾을 수 없습니다.";
pub const HOSPITAL_LOAD_FAILED: &str = "병원 정보를 불러오는데 실패했습니다.";
pub const HOSPITALS_LOAD_FAILED: &str = "병원 목록을 불러오는데 실패했습니다.";
pub const HOSPITAL_NAME_REQUIRED: &str = "병원 이름은 필수입니다.";
pub const HOSPITAL_ADDRESS_REQUIRED: &str = "주소는 필수입니다.";
pub const HOSPITAL_CREATE_FAILED: &str = "병원 등록에 실패했습니다.";
pub const HOSPITAL_CREATED: &str = "병원이 등록되었습니다.";
pub const INVALID_JSON_BODY: &str = "요청 본문이 올바른 JSON 형식이 아닙니다.";

pub const QNA_NOT_FOUND: &str = "Q&A를 찾을 수 없습니다.";
pub const QNA_LOAD_FAILED: &str = "Q&A를 불러오는데 실패했습니다.";

pub const REVIEWS_LOAD_FAILED: &str = "리뷰 목록을 불러오는데 실패했습니다.";

pub const LOGIN_REQUIRED: &str = "로그인이 필요합니다.";
pub const ADMIN_REQUIRED: &str = "관리자 권한이 필요합니다.";
