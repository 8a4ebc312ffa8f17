use super::*;

#[test]
fn initials_two_part_name_uses_first_and_last() {
    assert_eq!(initials("Ada Lovelace"), "AL");
}

#[test]
fn initials_three_part_name_skips_middle() {
    assert_eq!(initials("gabriel garcia marquez"), "GM");
}

#[test]
fn initials_single_word_uses_first_two_characters() {
    assert_eq!(initials("Madonna"), "MA");
}

#[test]
fn initials_single_character_is_not_padded() {
    assert_eq!(initials("A"), "A");
    assert_eq!(initials("z"), "Z");
}

#[test]
fn initials_empty_name_is_empty() {
    assert_eq!(initials(""), "");
}

#[test]
fn initials_ignores_surrounding_whitespace_when_splitting() {
    assert_eq!(initials("  Ada Lovelace  "), "AL");
}

#[test]
fn initials_double_space_still_reaches_last_part() {
    assert_eq!(initials("Ada  Lovelace"), "AL");
}

#[test]
fn initials_handles_multibyte_characters() {
    assert_eq!(initials("ñandú Óscar"), "ÑÓ");
    assert_eq!(initials("élodie"), "ÉL");
}
