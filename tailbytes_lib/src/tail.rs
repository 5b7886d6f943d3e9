/** ------------------------------------------------------------
 * Popping elements off the tail of a sequence
 * ------------------------------------------------------------- */
use crate::errors::TailError;
use log::debug;

fn check_count(available: usize, requested: usize) -> Result<(), TailError> {
    if requested > available {
        return Err(TailError::EmptySequence {
            requested,
            available,
        });
    }
    Ok(())
}

/**
 * Remove the last `count` elements of `seq` and return them in their
 * original order.
 *
 * The sequence is left untouched when it holds fewer than `count`
 * elements.
 *
 * # Example
 *
 * ```
 * use tailbytes_lib::pop_n;
 *
 * let mut stk = vec![10, 3, 1, 56, 1, 67];
 * assert_eq!(pop_n(&mut stk, 4).unwrap(), vec![1, 56, 1, 67]);
 * assert_eq!(stk, vec![10, 3]);
 * ```
 */
pub fn pop_n<T>(seq: &mut Vec<T>, count: usize) -> Result<Vec<T>, TailError> {
    check_count(seq.len(), count)?;
    let tail = seq.split_off(seq.len() - count);
    debug!("popped {} elements, {} remaining", count, seq.len());
    Ok(tail)
}
