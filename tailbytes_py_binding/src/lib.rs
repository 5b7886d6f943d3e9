use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyList;
use tailbytes_lib::{
    decode_bytes, pop_n as pop_tail, BigInt, ByteOrder, DecodeError, InvalidReason,
    TailbytesError,
};

// EmptySequence mirrors popping from an empty list, everything else is a bad value
fn to_py_err(err: TailbytesError) -> PyErr {
    match err {
        TailbytesError::Tail(e) => PyIndexError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

/**
 * Pop values off the end of a list
 *
 * \param seq:   List to pop from. It is shortened in place.
 * \param count: Number of values to pop
 *
 * \returns The popped values in their original order. Elements can be of
 *          any type.
 */
#[pyfunction]
fn pop_n<'py>(seq: &Bound<'py, PyList>, count: usize) -> PyResult<Bound<'py, PyList>> {
    let len = seq.len();
    let mut items: Vec<Bound<'py, PyAny>> = seq.iter().collect();
    let popped = pop_tail(&mut items, count).map_err(|e| to_py_err(e.into()))?;
    seq.del_slice(items.len(), len)?;
    Ok(PyList::new_bound(seq.py(), popped))
}

/**
 * Decode an iterable of byte values into a signed integer
 *
 * \param values:    Byte values, each an int in 0..=255
 * \param byteorder: "little", "big" or "native"
 */
#[pyfunction]
#[pyo3(signature = (values, byteorder = "native"))]
fn from_bytes(values: &Bound<'_, PyAny>, byteorder: &str) -> PyResult<BigInt> {
    let order: ByteOrder = byteorder
        .parse()
        .map_err(|e| to_py_err(TailbytesError::from(e)))?;

    let mut bytes = Vec::new();
    for (index, item) in values.iter()?.enumerate() {
        let byte = item?.extract::<u8>().map_err(|_| {
            to_py_err(
                DecodeError::InvalidByteSequence {
                    reason: InvalidReason::NotAByte { index },
                }
                .into(),
            )
        })?;
        bytes.push(byte);
    }

    decode_bytes(&bytes, order).map_err(|e| to_py_err(e.into()))
}

#[pymodule]
fn tailbytes<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pop_n, m)?)?;
    m.add_function(wrap_pyfunction!(from_bytes, m)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_shortens_list_in_place() {
        Python::with_gil(|py| {
            let stk = PyList::new_bound(py, [10, 3, 1, 56, 1, 67]);
            let popped = pop_n(&stk, 4).unwrap();

            assert_eq!(popped.extract::<Vec<i64>>().unwrap(), vec![1, 56, 1, 67]);
            assert_eq!(stk.extract::<Vec<i64>>().unwrap(), vec![10, 3]);
        });
    }

    #[test]
    fn pop_accepts_any_element() {
        Python::with_gil(|py| {
            let stk = PyList::new_bound(py, ["a", "b", "c"]);
            let popped = pop_n(&stk, 2).unwrap();

            assert_eq!(popped.extract::<Vec<String>>().unwrap(), vec!["b", "c"]);
            assert_eq!(stk.len(), 1);
        });
    }

    #[test]
    fn pop_too_many_raises_index_error() {
        Python::with_gil(|py| {
            let stk = PyList::new_bound(py, [1, 2]);
            let err = pop_n(&stk, 3).unwrap_err();

            assert!(err.is_instance_of::<PyIndexError>(py));
            assert_eq!(stk.extract::<Vec<i64>>().unwrap(), vec![1, 2]);
        });
    }

    #[test]
    fn bytes_pop() {
        Python::with_gil(|py| {
            let stk = PyList::new_bound(py, [10, 3, 1, 56, 1, 67]);
            let popped = pop_n(&stk, 4).unwrap();
            let value = from_bytes(popped.as_any(), "little").unwrap();

            assert_eq!(value, BigInt::from(1124153345));
            assert_eq!(stk.len(), 2);
        });
    }

    #[test]
    fn wide_input_decodes() {
        Python::with_gil(|py| {
            let mut values = vec![0u8; 17];
            values[0] = 1;
            let list = PyList::new_bound(py, values);

            assert_eq!(
                from_bytes(list.as_any(), "little").unwrap(),
                BigInt::from(1)
            );
        });
    }

    #[test]
    fn bad_values_raise_value_error() {
        Python::with_gil(|py| {
            let huge = py.eval_bound("[1, 2**70]", None, None).unwrap();
            let err = from_bytes(&huge, "little").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let negative = PyList::new_bound(py, [1, -1]);
            let err = from_bytes(negative.as_any(), "big").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let strings = PyList::new_bound(py, ["x"]);
            let err = from_bytes(strings.as_any(), "big").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));

            let empty = PyList::empty_bound(py);
            let err = from_bytes(empty.as_any(), "big").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn unknown_byteorder_raises_value_error() {
        Python::with_gil(|py| {
            let list = PyList::new_bound(py, [1]);
            let err = from_bytes(list.as_any(), "middle").unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }
}
