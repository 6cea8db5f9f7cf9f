/// 校验并规范化课程名称，返回去除首尾空白后的名称
pub fn validate_course_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Course name may not be blank");
    }
    Ok(name.to_string())
}

/// 校验并规范化学生姓名
pub fn validate_student_name(name: &str) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Student name may not be blank");
    }
    Ok(name.to_string())
}

/// 去除重复的学生ID，保留首次出现的顺序
pub fn normalize_student_ids(student_ids: Vec<i64>) -> Vec<i64> {
    let mut seen = std::collections::HashSet::with_capacity(student_ids.len());
    student_ids
        .into_iter()
        .filter(|id| seen.insert(*id))
        .collect()
}

/// 校验课程学生人数上限
pub fn validate_students_limit(count: usize, max: usize) -> Result<(), String> {
    if count > max {
        return Err(format!(
            "A course may have at most {max} students, got {count}"
        ));
    }
    Ok(())
}
