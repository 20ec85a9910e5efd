// Word-level transducer: one left-to-right scan per word, emitting into
// the shared output buffer with a checkpointed rewind on contamination.

use super::TranslationRules;

/// Scan the word starting at `read`, append its translated (or verbatim)
/// form to `output`, and return the read position advanced past the word
/// and at most one trailing separator character.
///
/// Letters from the first vowel onward are emitted while scanning; the
/// held-back leading consonant cluster and the suffix follow once the
/// word's end is known. Finding an invalid character rewinds the output
/// to the word's starting write position and replays the scanned prefix
/// verbatim.
pub(crate) fn transduce_word(
    source: &[char],
    read: usize,
    output: &mut String,
    rules: &TranslationRules,
) -> usize {
    let start = read;
    let checkpoint = output.len();
    let mut position = read;
    let mut vowel_at: Option<usize> = None;
    let mut contaminated = false;

    while position < source.len() {
        let letter = source[position];

        if rules.is_separator(letter) {
            break;
        }

        if !contaminated {
            if !rules.is_word_char(letter) {
                // Rewind to the word's starting write position and replay
                // everything scanned so far; the rest copies verbatim.
                contaminated = true;
                output.truncate(checkpoint);
                output.extend(source[start..position].iter());
                vowel_at = None;
            } else if vowel_at.is_none() {
                if rules.is_vowel(letter) {
                    vowel_at = Some(position);
                } else {
                    // Leading consonant cluster is held back until the
                    // word's end is known.
                    position += 1;
                    continue;
                }
            }
        }

        output.push(letter);
        position += 1;
    }

    if position != start && !contaminated {
        match vowel_at {
            // All consonants: the whole word was held back.
            None => output.extend(source[start..position].iter()),
            // Rotate the leading cluster behind the emitted vowel tail.
            Some(vowel) => output.extend(source[start..vowel].iter()),
        }

        if vowel_at == Some(start) {
            output.push('w');
        }
        output.push('a');
        output.push('y');
    }

    // Copy the separator that stopped the scan, if any.
    if position < source.len() {
        output.push(source[position]);
        position + 1
    } else {
        position
    }
}
